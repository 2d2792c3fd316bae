//! Render planned items and write them to disk

use crate::error::{Error, Result};
use crate::plan::FilePlanItem;
use crate::templates::TemplateRegistry;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Render and write every item in order
///
/// All template names are checked before anything is rendered. After that the
/// first render or write failure stops the run; files already written are
/// left in place. Returns the written paths in write order.
pub fn execute(registry: &TemplateRegistry, items: &[FilePlanItem]) -> Result<Vec<PathBuf>> {
    if let Some(item) = items.iter().find(|item| !registry.contains(item.template)) {
        return Err(Error::UnknownTemplate(item.template.to_string()));
    }

    let mut buf = Vec::new();
    let mut written = Vec::with_capacity(items.len());

    for item in items {
        registry.render_into(item.template, item.params.as_ref(), &mut buf)?;
        write_file(&item.destination, &buf)?;
        tracing::debug!(
            template = item.template,
            path = %item.destination.display(),
            bytes = buf.len(),
            "wrote file"
        );
        buf.clear();
        written.push(item.destination.clone());
    }

    Ok(written)
}

/// Replace the file's contents, creating it if needed
fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options
        .open(path)
        .map_err(|source| Error::filesystem(path, source))?;
    file.write_all(contents)
        .map_err(|source| Error::filesystem(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{embedded, TemplateEntry};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_rendered_items_in_order() {
        let tmp = TempDir::new().unwrap();
        let registry = TemplateRegistry::builtin().unwrap();
        let items = vec![
            FilePlanItem::new(embedded::GITIGNORE, tmp.path().join(".gitignore")),
            FilePlanItem::new(embedded::GO_MOD, tmp.path().join("go.mod"))
                .with_params(json!({ "mod_name": "demo" })),
        ];

        let written = execute(&registry, &items).unwrap();

        assert_eq!(
            written,
            vec![tmp.path().join(".gitignore"), tmp.path().join("go.mod")]
        );
        let go_mod = fs::read_to_string(tmp.path().join("go.mod")).unwrap();
        assert!(go_mod.starts_with("module demo\n"));
        // buffer is reset between items
        assert!(!go_mod.contains(".DS_Store"));
    }

    #[test]
    fn test_overwrites_longer_existing_file() {
        let tmp = TempDir::new().unwrap();
        let registry = TemplateRegistry::builtin().unwrap();
        let path = tmp.path().join(".gitignore");
        fs::write(&path, "x".repeat(4096)).unwrap();

        execute(&registry, &[FilePlanItem::new(embedded::GITIGNORE, &path)]).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"**/.DS_Store\n.idea/\n");
    }

    #[test]
    fn test_unknown_template_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let registry = TemplateRegistry::builtin().unwrap();
        let items = vec![
            FilePlanItem::new(embedded::GITIGNORE, tmp.path().join(".gitignore")),
            FilePlanItem::new("router", tmp.path().join("router.go")),
        ];

        let err = execute(&registry, &items).unwrap_err();

        assert!(matches!(err, Error::UnknownTemplate(name) if name == "router"));
        assert!(!tmp.path().join(".gitignore").exists());
    }

    #[test]
    fn test_render_failure_keeps_earlier_writes() {
        let tmp = TempDir::new().unwrap();
        let registry = TemplateRegistry::builtin().unwrap();
        let items = vec![
            FilePlanItem::new(embedded::GITIGNORE, tmp.path().join(".gitignore")),
            // go.mod needs mod_name
            FilePlanItem::new(embedded::GO_MOD, tmp.path().join("go.mod")),
            FilePlanItem::new(embedded::LOG, tmp.path().join("log.go")),
        ];

        let err = execute(&registry, &items).unwrap_err();

        assert!(matches!(err, Error::Template { ref name, .. } if name == embedded::GO_MOD));
        assert!(tmp.path().join(".gitignore").exists());
        assert!(!tmp.path().join("go.mod").exists());
        assert!(!tmp.path().join("log.go").exists());
    }

    #[test]
    fn test_missing_parent_directory_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let registry = TemplateRegistry::builtin().unwrap();
        let dest = tmp.path().join("model/model.go");

        let err =
            execute(&registry, &[FilePlanItem::new(embedded::BASE_MODEL, &dest)]).unwrap_err();

        match err {
            Error::Filesystem { path, .. } => assert_eq!(path, dest),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_custom_registry_entries() {
        let tmp = TempDir::new().unwrap();
        let entries = [TemplateEntry::new("greeting", "hello {{name}}")];
        let registry = TemplateRegistry::from_entries(&entries).unwrap();
        let dest = tmp.path().join("greeting.txt");

        execute(
            &registry,
            &[FilePlanItem::new("greeting", &dest).with_params(json!({ "name": "demo" }))],
        )
        .unwrap();

        assert_eq!(fs::read_to_string(dest).unwrap(), "hello demo");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_files_are_not_group_writable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let registry = TemplateRegistry::builtin().unwrap();
        let path = tmp.path().join(".gitignore");

        execute(&registry, &[FilePlanItem::new(embedded::GITIGNORE, &path)]).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !FILE_MODE, 0);
    }
}
