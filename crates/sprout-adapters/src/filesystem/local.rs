//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use sprout_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, PathKind},
    },
    domain::FileMode,
    error::{SproutError, SproutResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn path_kind(&self, path: &Path) -> SproutResult<PathKind> {
        // Follow links; a dangling link still occupies the path.
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(PathKind::Directory),
            Ok(_) => Ok(PathKind::File),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                match std::fs::symlink_metadata(path) {
                    Ok(_) => Ok(PathKind::File),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
                    Err(e) => Err(map_io_error(path, e, "inspect path")),
                }
            }
            Err(e) => Err(map_io_error(path, e, "inspect path")),
        }
    }

    fn create_dir_all(&self, path: &Path) -> SproutResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8], mode: FileMode) -> SproutResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;
        set_mode(path, mode)
    }

    fn remove_dir_all(&self, path: &Path) -> SproutResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn ensure_writable(&self, dir: &Path) -> SproutResult<()> {
        // Probe with a real file; permission bits alone miss ACLs and
        // read-only mounts.
        tempfile::Builder::new()
            .prefix(".sprout-probe")
            .tempfile_in(dir)
            .map(drop)
            .map_err(|e| map_io_error(dir, e, "create files in directory"))
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: FileMode) -> SproutResult<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode.bits()))
        .map_err(|e| map_io_error(path, e, "set permissions"))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: FileMode) -> SproutResult<()> {
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SproutError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn classifies_paths() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = dir.path().join("file");
        std::fs::write(&file, "x").unwrap();

        assert_eq!(fs.path_kind(dir.path()).unwrap(), PathKind::Directory);
        assert_eq!(fs.path_kind(&file).unwrap(), PathKind::File);
        assert_eq!(
            fs.path_kind(&dir.path().join("missing")).unwrap(),
            PathKind::Missing
        );
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_when_classifying() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let target = dir.path().join("target");
        std::fs::create_dir(&target).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        let dangling = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("gone"), &dangling).unwrap();

        assert_eq!(fs.path_kind(&link).unwrap(), PathKind::Directory);
        assert_eq!(fs.path_kind(&dangling).unwrap(), PathKind::File);
    }

    #[test]
    fn writes_bytes_verbatim() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("blob.bin");
        let bytes = [0u8, 159, 146, 150, b'{', b'{'];

        fs.write_file(&path, &bytes, FileMode::DEFAULT).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[cfg(unix)]
    #[test]
    fn applies_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("run.sh");

        fs.write_file(&path, b"#!/bin/sh\n", FileMode::EXECUTABLE).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn writable_probe_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        LocalFilesystem::new().ensure_writable(dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writable_probe_fails_for_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .ensure_writable(&dir.path().join("missing"))
            .unwrap_err();
        assert!(err.to_string().contains("filesystem error"));
    }

    #[test]
    fn remove_dir_all_removes_tree() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a/b");
        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&nested.join("f"), b"x", FileMode::DEFAULT).unwrap();

        fs.remove_dir_all(&dir.path().join("a")).unwrap();
        assert_eq!(fs.path_kind(&dir.path().join("a")).unwrap(), PathKind::Missing);
    }
}
