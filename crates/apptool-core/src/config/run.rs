//! Validated, immutable settings for one generation run

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What a run generates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Bootstrap directories, write the full scaffold and the model files
    New,
    /// Rewrite the model files only
    Update,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::New => "new",
            Mode::Update => "update",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "new" => Ok(Mode::New),
            "update" => Ok(Mode::Update),
            other => Err(Error::Usage(format!(
                "type must be 'new' or 'update', got '{}'",
                other
            ))),
        }
    }
}

/// Settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    mode: Mode,
    target_dir: PathBuf,
    module_name: String,
    description_source: Option<PathBuf>,
}

impl RunConfig {
    /// Validate the invocation and fill in defaults
    ///
    /// - an empty module name is a usage error
    /// - a missing or empty target directory becomes `./<module_name>`
    /// - a non-empty description source is resolved to an absolute path
    pub fn new(
        mode: Mode,
        module_name: impl Into<String>,
        target_dir: Option<PathBuf>,
        description_source: Option<PathBuf>,
    ) -> Result<Self> {
        let module_name = module_name.into();
        if module_name.is_empty() {
            return Err(Error::Usage("mod name must not be empty".to_string()));
        }

        let target_dir = match target_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new(".").join(&module_name),
        };

        let description_source = match description_source {
            Some(path) if !path.as_os_str().is_empty() => Some(
                std::path::absolute(&path).map_err(|source| Error::filesystem(&path, source))?,
            ),
            _ => None,
        };

        Ok(Self {
            mode,
            target_dir,
            module_name,
            description_source,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Absolute path of the interface description, if one was given
    pub fn description_source(&self) -> Option<&Path> {
        self.description_source.as_deref()
    }
}
