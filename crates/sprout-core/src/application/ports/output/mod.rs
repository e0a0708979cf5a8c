//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprout-adapters` crate provides implementations.

use std::path::Path;

use thiserror::Error;

use crate::domain::FileMode;
use crate::error::SproutResult;

/// Whether a template source entry is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One immediate child of a template source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl SourceEntry {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Full content of a template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub contents: Vec<u8>,
    /// Unix permission bits, when the source knows them.
    pub mode: Option<u32>,
}

/// Port for the read-only template collection.
///
/// Paths are slash-delimited and relative to the collection root; the empty
/// string is the root itself. Each top-level directory is one language.
///
/// Implemented by:
/// - `sprout_adapters::template_source::EmbeddedTemplates` (bundled, default)
/// - `sprout_adapters::template_source::DirectoryTemplates` (on-disk override)
/// - `sprout_adapters::template_source::MemoryTemplates` (testing)
pub trait TemplateSource: Send + Sync {
    /// List the immediate children of a directory, sorted by name.
    fn list_dir(&self, path: &str) -> SproutResult<Vec<SourceEntry>>;

    /// Read a file's content and permission bits.
    fn read_file(&self, path: &str) -> SproutResult<SourceFile>;

    /// Whether `path` names a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Top-level directory names, i.e. the supported languages.
    fn languages(&self) -> SproutResult<Vec<String>> {
        Ok(self
            .list_dir("")?
            .into_iter()
            .filter(SourceEntry::is_dir)
            .map(|e| e.name)
            .collect())
    }
}

/// What currently occupies a destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Missing,
    File,
    Directory,
}

/// Port for filesystem operations on the destination.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Inspect a path without following it into its contents.
    fn path_kind(&self, path: &Path) -> SproutResult<PathKind>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Write content to a file and apply `mode`.
    fn write_file(&self, path: &Path, content: &[u8], mode: FileMode) -> SproutResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Fail unless new entries can be created inside `dir`.
    fn ensure_writable(&self, dir: &Path) -> SproutResult<()>;
}

/// An external command exited unsuccessfully or could not be run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct CommandFailure {
    /// Exit status, spawn error, or timeout description.
    pub reason: String,
    /// Combined stdout and stderr.
    pub output: String,
}

/// Port for running version-control commands.
///
/// Implemented by:
/// - `sprout_adapters::vcs::GitRunner` (production)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run one command with `dir` as the working directory.
    fn run(&self, dir: &Path, args: &[String]) -> Result<(), CommandFailure>;
}
