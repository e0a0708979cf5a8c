//! Templates read from a directory on disk.
//!
//! Lets users maintain their own collection without rebuilding the binary.
//! Permission bits come from the files themselves.

use std::fs;
use std::path::{Component, Path, PathBuf};

use sprout_core::{
    application::ports::{SourceEntry, SourceFile, TemplateSource},
    error::SproutResult,
};
use tracing::debug;

use super::source_error;

/// A template collection rooted at a local directory.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    /// Open a collection. Fails if `root` is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> SproutResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(source_error(
                &root.display().to_string(),
                "template directory does not exist",
            ));
        }
        debug!(root = %root.display(), "using on-disk templates");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a slash path under the root, refusing anything that would
    /// leave it.
    fn resolve(&self, path: &str) -> SproutResult<PathBuf> {
        let mut resolved = self.root.clone();
        for part in path.split('/').filter(|p| !p.is_empty()) {
            let mut components = Path::new(part).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(name)), None) => resolved.push(name),
                _ => return Err(source_error(path, "path escapes the template root")),
            }
        }
        Ok(resolved)
    }
}

impl TemplateSource for DirectoryTemplates {
    fn list_dir(&self, path: &str) -> SproutResult<Vec<SourceEntry>> {
        let dir = self.resolve(path)?;
        let read = fs::read_dir(&dir).map_err(|e| source_error(path, e.to_string()))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| source_error(path, e.to_string()))?;
            let file_type = entry
                .file_type()
                .map_err(|e| source_error(path, e.to_string()))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if file_type.is_dir() {
                entries.push(SourceEntry::directory(name));
            } else {
                entries.push(SourceEntry::file(name));
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> SproutResult<SourceFile> {
        let file = self.resolve(path)?;
        let contents = fs::read(&file).map_err(|e| source_error(path, e.to_string()))?;

        Ok(SourceFile {
            contents,
            mode: file_mode(&file),
        })
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_dir()).unwrap_or(false)
    }
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).ok().map(|m| m.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> Option<u32> {
    None
}
