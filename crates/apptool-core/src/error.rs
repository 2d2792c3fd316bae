//! Error type shared by every generation phase

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Anything that can stop a generation run
///
/// None of these are recovered internally. The first one raised aborts the
/// run and files written before it stay on disk.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing input, raised before any filesystem mutation
    #[error("{0}")]
    Usage(String),

    /// Directory creation or file write failed
    #[error("filesystem operation failed on {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A plan item names a template the registry does not know
    #[error("template '{0}' is not registered")]
    UnknownTemplate(String),

    /// Two registry entries share a name
    #[error("template '{0}' is registered more than once")]
    DuplicateTemplate(String),

    /// A template failed to parse or render
    #[error("template '{name}' failed")]
    Template {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Capability that exists in the provider contract but has no implementation yet
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl Error {
    pub(crate) fn filesystem(path: &Path, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn template<E>(name: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Template {
            name: name.to_string(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_filesystem_error_names_path_and_keeps_source() {
        let err = Error::filesystem(
            Path::new("demo/conf"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(err.to_string().contains("demo/conf"));
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }

    #[test]
    fn test_usage_error_displays_message_verbatim() {
        let err = Error::Usage("module name must not be empty".to_string());
        assert_eq!(err.to_string(), "module name must not be empty");
    }
}
