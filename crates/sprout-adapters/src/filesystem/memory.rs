//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sprout_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, PathKind},
    },
    domain::FileMode,
    error::{SproutError, SproutResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// [`Creator`](sprout_core::application::Creator).
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, (Vec<u8>, FileMode)>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).map(|(content, _)| content.clone())
    }

    /// The mode a file was written with.
    pub fn mode(&self, path: &Path) -> Option<FileMode> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).map(|(_, mode)| *mode)
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of mutating calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }

    /// Make [`Filesystem::ensure_writable`] fail for `dir`.
    pub fn set_read_only(&self, dir: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(dir.into());
        }
    }

    fn write(&self, path: &Path) -> SproutResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_error(path))
    }
}

impl Filesystem for MemoryFilesystem {
    fn path_kind(&self, path: &Path) -> SproutResult<PathKind> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        Ok(if inner.directories.contains(path) {
            PathKind::Directory
        } else if inner.files.contains_key(path) {
            PathKind::File
        } else {
            PathKind::Missing
        })
    }

    fn create_dir_all(&self, path: &Path) -> SproutResult<()> {
        let mut inner = self.write(path)?;
        inner.writes += 1;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "not a directory".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8], mode: FileMode) -> SproutResult<()> {
        let mut inner = self.write(path)?;
        inner.writes += 1;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner
            .files
            .insert(path.to_path_buf(), (content.to_vec(), mode));
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> SproutResult<()> {
        let mut inner = self.write(path)?;
        inner.writes += 1;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn ensure_writable(&self, dir: &Path) -> SproutResult<()> {
        let inner = self.inner.read().map_err(|_| lock_error(dir))?;
        if inner.read_only.contains(dir) {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        Ok(())
    }
}

fn lock_error(path: &Path) -> SproutError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}
