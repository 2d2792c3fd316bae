//! Template bodies compiled into the binary
//!
//! Each constant names a template; [`BUILTIN_TEMPLATES`] pairs the names with
//! their bodies. The `include_str!` paths are relative to this file.

use super::registry::TemplateEntry;

pub const GITIGNORE: &str = "gitignore";
pub const GO_MOD: &str = "go_mod";
pub const CONF: &str = "conf";
pub const CONF_YAML: &str = "conf_yaml";
pub const MAIN: &str = "main";
pub const PING_HANDLER: &str = "ping_handler";
pub const APP_WRAPPER: &str = "app_wrapper";
pub const APP_RESPONSE: &str = "app_response";
pub const ERR: &str = "err";
pub const ERR_COMMON: &str = "err_common";
pub const LOG: &str = "log";
pub const LOG_ID: &str = "log_id";
pub const LOG_ID_MIDDLEWARE: &str = "log_id_middleware";
pub const DAO: &str = "dao";
pub const BASE_MODEL: &str = "base_model";
pub const USER_MODEL: &str = "user_model";

pub const BUILTIN_TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry::new(GITIGNORE, include_str!("../../templates/go/gitignore.tmpl")),
    TemplateEntry::new(GO_MOD, include_str!("../../templates/go/go_mod.tmpl")),
    TemplateEntry::new(CONF, include_str!("../../templates/go/conf.go.tmpl")),
    TemplateEntry::new(CONF_YAML, include_str!("../../templates/go/conf.yaml.tmpl")),
    TemplateEntry::new(MAIN, include_str!("../../templates/go/main.go.tmpl")),
    TemplateEntry::new(PING_HANDLER, include_str!("../../templates/go/ping.go.tmpl")),
    TemplateEntry::new(APP_WRAPPER, include_str!("../../templates/go/app_wrapper.go.tmpl")),
    TemplateEntry::new(APP_RESPONSE, include_str!("../../templates/go/app_response.go.tmpl")),
    TemplateEntry::new(ERR, include_str!("../../templates/go/err.go.tmpl")),
    TemplateEntry::new(ERR_COMMON, include_str!("../../templates/go/err_common.go.tmpl")),
    TemplateEntry::new(LOG, include_str!("../../templates/go/log.go.tmpl")),
    TemplateEntry::new(LOG_ID, include_str!("../../templates/go/logid.go.tmpl")),
    TemplateEntry::new(
        LOG_ID_MIDDLEWARE,
        include_str!("../../templates/go/middleware_log.go.tmpl"),
    ),
    TemplateEntry::new(DAO, include_str!("../../templates/go/dao.go.tmpl")),
    TemplateEntry::new(BASE_MODEL, include_str!("../../templates/go/model.go.tmpl")),
    TemplateEntry::new(USER_MODEL, include_str!("../../templates/go/user.go.tmpl")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique() {
        let names: HashSet<_> = BUILTIN_TEMPLATES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), BUILTIN_TEMPLATES.len());
    }

    #[test]
    fn test_builtin_bodies_are_not_empty() {
        for entry in BUILTIN_TEMPLATES {
            assert!(!entry.source.is_empty(), "{} has an empty body", entry.name);
        }
    }
}
