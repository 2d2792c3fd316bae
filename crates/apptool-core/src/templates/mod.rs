//! Built-in templates and the registry that renders them
//!
//! Template bodies live under `templates/go/` in this crate and are embedded
//! into the binary at compile time by [`embedded`]. They are registered once,
//! during [`TemplateRegistry::builtin`], and never change afterwards.
//!
//! Templates use Handlebars syntax in strict mode. The only variable any
//! built-in template references is `{{mod_name}}`, the Go module name.

pub mod embedded;
pub mod registry;

pub use embedded::BUILTIN_TEMPLATES;
pub use registry::{TemplateEntry, TemplateRegistry};
