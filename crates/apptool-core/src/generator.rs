//! End-to-end generation run

use crate::bootstrap;
use crate::config::{Mode, RunConfig};
use crate::error::Result;
use crate::plan;
use crate::provider;
use crate::templates::TemplateRegistry;
use crate::writer;
use std::path::PathBuf;

/// What a finished run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub mode: Mode,
    pub target_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Owns the template registry and runs generation against it
pub struct Generator {
    registry: TemplateRegistry,
}

impl Generator {
    /// Build a generator over the built-in templates
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(TemplateRegistry::builtin()?))
    }

    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Run one generation pass
    ///
    /// Provider selection happens first so that unsupported inputs fail
    /// before anything is created. New projects then get their directory
    /// tree, and finally every planned file is rendered and written.
    pub fn generate(&self, config: &RunConfig) -> Result<GenerationReport> {
        let provider = provider::select_provider(config)?;

        if config.mode() == Mode::New {
            tracing::info!(dir = %config.target_dir().display(), "creating project directories");
            bootstrap::ensure_directories(bootstrap::project_dirs(config.target_dir()))?;
        }

        let items = plan::build_plan(config, provider.as_ref());
        tracing::info!(mode = %config.mode(), files = items.len(), "generating files");

        let written = writer::execute(&self.registry, &items)?;

        Ok(GenerationReport {
            mode: config.mode(),
            target_dir: config.target_dir().to_path_buf(),
            written,
        })
    }
}

/// Run generation with the built-in templates
pub fn generate(config: &RunConfig) -> Result<GenerationReport> {
    Generator::new()?.generate(config)
}
