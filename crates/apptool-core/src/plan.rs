//! File plan: which template gets written where

use crate::config::{Mode, RunConfig};
use crate::provider::ModelDescriptionProvider;
use crate::templates::embedded;
use serde_json::{json, Value};
use std::path::PathBuf;

/// One unit of generation work
#[derive(Debug, Clone, PartialEq)]
pub struct FilePlanItem {
    /// Registry name of the template to render
    pub template: &'static str,

    /// File the rendered output is written to
    pub destination: PathBuf,

    /// Data the template is rendered against, if it needs any
    pub params: Option<Value>,
}

impl FilePlanItem {
    pub fn new(template: &'static str, destination: impl Into<PathBuf>) -> Self {
        Self {
            template,
            destination: destination.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}

/// Scaffold files written once per new project: (template, path relative to the project)
///
/// `true` in the last column marks templates that need the module name.
const SCAFFOLD: &[(&str, &str, bool)] = &[
    (embedded::GITIGNORE, ".gitignore", false),
    (embedded::GO_MOD, "go.mod", true),
    (embedded::CONF, "conf/conf.go", false),
    (embedded::CONF_YAML, "conf/conf.yaml", false),
    (embedded::MAIN, "main.go", true),
    (embedded::PING_HANDLER, "handler/ping.go", false),
    (embedded::APP_WRAPPER, "pkg/app/wrapper.go", false),
    (embedded::APP_RESPONSE, "pkg/app/response.go", true),
    (embedded::ERR, "pkg/e/err.go", false),
    (embedded::ERR_COMMON, "pkg/e/common.go", false),
    (embedded::LOG, "pkg/logs/log.go", false),
    (embedded::LOG_ID, "pkg/logs/logid.go", false),
    (embedded::LOG_ID_MIDDLEWARE, "middleware/log.go", true),
    (embedded::DAO, "dao/dao.go", true),
];

/// Assemble the ordered list of files to generate
///
/// New projects get the full scaffold followed by the provider's model files;
/// updates only get the model files. Order decides write order only.
pub fn build_plan(
    config: &RunConfig,
    provider: &dyn ModelDescriptionProvider,
) -> Vec<FilePlanItem> {
    let mut items = Vec::new();

    if config.mode() == Mode::New {
        let module = json!({ "mod_name": config.module_name() });
        items.extend(SCAFFOLD.iter().map(|&(template, path, needs_module)| {
            let item = FilePlanItem::new(template, config.target_dir().join(path));
            if needs_module {
                item.with_params(module.clone())
            } else {
                item
            }
        }));
    }

    items.extend(provider.model_files());
    items
}
