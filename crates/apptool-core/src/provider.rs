//! Model description providers
//!
//! A provider turns an interface description into route code and model
//! files. Only the empty provider exists today: it is used when no
//! description source is given and contributes a fixed pair of models.

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::plan::FilePlanItem;
use crate::templates::embedded;
use std::path::{Path, PathBuf};

/// Capabilities every provider offers
pub trait ModelDescriptionProvider {
    /// Router registration code for the described entities
    fn route_code(&self) -> Result<String>;

    /// Model files to generate, in write order
    fn model_files(&self) -> Vec<FilePlanItem>;
}

/// Provider used when there is no description source
#[derive(Debug, Clone)]
pub struct EmptyProvider {
    dir: PathBuf,
}

impl EmptyProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ModelDescriptionProvider for EmptyProvider {
    fn route_code(&self) -> Result<String> {
        Err(Error::NotImplemented(
            "route code generation without an interface description".to_string(),
        ))
    }

    fn model_files(&self) -> Vec<FilePlanItem> {
        vec![
            FilePlanItem::new(embedded::BASE_MODEL, self.dir.join("model/model.go")),
            FilePlanItem::new(embedded::USER_MODEL, self.dir.join("model/user.go")),
        ]
    }
}

/// Pick the provider for a run
///
/// A description source would select a parser-backed provider, which does not
/// exist yet, so that case is reported before anything touches the disk.
pub fn select_provider(config: &RunConfig) -> Result<Box<dyn ModelDescriptionProvider>> {
    match config.description_source() {
        None => Ok(Box::new(EmptyProvider::new(config.target_dir()))),
        Some(path) => Err(unsupported_description(path)),
    }
}

fn unsupported_description(path: &Path) -> Error {
    Error::NotImplemented(format!(
        "parsing interface description {}",
        path.display()
    ))
}
