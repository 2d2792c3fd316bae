//! Named, pre-compiled templates

use super::embedded::BUILTIN_TEMPLATES;
use crate::error::{Error, Result};
use handlebars::Handlebars;
use serde_json::{Map, Value};

/// A template name paired with its body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: &'static str,
    pub source: &'static str,
}

impl TemplateEntry {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }
}

/// Frozen lookup table from template name to compiled template
///
/// Built once before any file is generated and only read afterwards.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile every built-in template
    ///
    /// A malformed built-in body is a programming error; callers should abort
    /// on the returned error rather than try to continue.
    pub fn builtin() -> Result<Self> {
        Self::from_entries(BUILTIN_TEMPLATES)
    }

    /// Compile an arbitrary set of entries
    ///
    /// Names must be unique; a repeated name is rejected rather than replacing
    /// the earlier body.
    pub fn from_entries(entries: &[TemplateEntry]) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Undefined fields must fail rather than render as empty strings
        handlebars.set_strict_mode(true);
        // Output is source code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        for entry in entries {
            if handlebars.has_template(entry.name) {
                return Err(Error::DuplicateTemplate(entry.name.to_string()));
            }
            handlebars
                .register_template_string(entry.name, entry.source)
                .map_err(|e| Error::template(entry.name, e))?;
        }

        tracing::debug!(count = entries.len(), "registered templates");
        Ok(Self { handlebars })
    }

    /// Check whether a template with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a template into a fresh buffer
    pub fn render(&self, name: &str, params: Option<&Value>) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render_into(name, params, &mut buf)?;
        Ok(buf)
    }

    /// Render a template, appending the output to `buf`
    ///
    /// Absent parameters render against an empty object, so any template that
    /// references a field fails in strict mode.
    pub fn render_into(
        &self,
        name: &str,
        params: Option<&Value>,
        buf: &mut Vec<u8>,
    ) -> Result<()> {
        if !self.contains(name) {
            return Err(Error::UnknownTemplate(name.to_string()));
        }

        let empty = Value::Object(Map::new());
        let data = params.unwrap_or(&empty);
        self.handlebars
            .render_to_write(name, data, buf)
            .map_err(|e| Error::template(name, e))
    }
}
