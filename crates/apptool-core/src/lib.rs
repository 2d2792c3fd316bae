//! apptool core - Go service scaffolding from built-in templates
//!
//! Given a module name and a target directory, this library writes a
//! skeleton gin/gorm backend: configuration loader, HTTP entrypoint, response
//! helpers, error types, logging helpers, data-access stub and model files.
//!
//! # Architecture
//!
//! A run is a single synchronous pass:
//!
//! 1. [`provider::select_provider`] picks the model description provider
//! 2. [`bootstrap::ensure_directories`] creates the project tree (new projects only)
//! 3. [`plan::build_plan`] lists every (template, destination, params) item
//! 4. [`writer::execute`] renders each item and writes it, stopping at the first error
//!
//! [`Generator`] wires these together over a [`TemplateRegistry`] that is
//! compiled once up front.
//!
//! # Example
//!
//! ```no_run
//! use apptool_core::{Generator, Mode, RunConfig};
//!
//! let config = RunConfig::new(Mode::New, "demo", None, None)?;
//! let report = Generator::new()?.generate(&config)?;
//! println!("wrote {} files", report.written.len());
//! # Ok::<(), apptool_core::Error>(())
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod generator;
pub mod plan;
pub mod provider;
pub mod templates;
pub mod writer;

// Re-export main types for convenience
pub use config::{Mode, RunConfig};
pub use error::{Error, Result};
pub use generator::{generate, GenerationReport, Generator};
pub use plan::{build_plan, FilePlanItem};
pub use provider::{select_provider, EmptyProvider, ModelDescriptionProvider};
pub use templates::{TemplateEntry, TemplateRegistry};
