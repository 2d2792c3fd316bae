//! Project directory bootstrapping

use crate::error::{Error, Result};
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Directories a new project needs, relative to the project root
const PROJECT_DIRS: &[&str] = &[
    "conf",
    "dao",
    "handler",
    "middleware",
    "model",
    "pkg/app",
    "pkg/e",
    "pkg/logs",
    "service",
];

/// Every directory a new project under `dir` needs
pub fn project_dirs(dir: &Path) -> Vec<PathBuf> {
    PROJECT_DIRS.iter().map(|d| dir.join(d)).collect()
}

/// Create each path and any missing ancestors
///
/// Existing directories are left alone. The first failure aborts the rest.
pub fn ensure_directories<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    for path in paths {
        let path = path.as_ref();
        builder
            .create(path)
            .map_err(|source| Error::filesystem(path, source))?;
        tracing::debug!(path = %path.display(), "ensured directory");
    }

    Ok(())
}
