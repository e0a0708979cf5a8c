//! In-memory template source for testing.

use std::collections::{BTreeMap, BTreeSet};

use sprout_core::{
    application::ports::{SourceEntry, SourceFile, TemplateSource},
    error::SproutResult,
};

use super::source_error;

/// Templates held in a map of slash path to contents.
///
/// Directories are implied by the file paths beneath them.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    files: BTreeMap<String, SourceFile>,
}

impl MemoryTemplates {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with no recorded mode.
    #[must_use]
    pub fn with_file(self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.with_file_mode(path, contents, None)
    }

    /// Add a file with explicit permission bits.
    #[must_use]
    pub fn with_file_mode(
        mut self,
        path: &str,
        contents: impl Into<Vec<u8>>,
        mode: Option<u32>,
    ) -> Self {
        self.files.insert(
            path.trim_matches('/').to_string(),
            SourceFile {
                contents: contents.into(),
                mode,
            },
        );
        self
    }

    fn prefix(path: &str) -> String {
        if path.is_empty() {
            String::new()
        } else {
            format!("{path}/")
        }
    }
}

impl TemplateSource for MemoryTemplates {
    fn list_dir(&self, path: &str) -> SproutResult<Vec<SourceEntry>> {
        if !path.is_empty() && !self.is_dir(path) {
            return Err(source_error(path, "no such template directory"));
        }

        let prefix = Self::prefix(path);
        let mut dirs = BTreeSet::new();
        let mut files = BTreeSet::new();
        for key in self.files.keys() {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((dir, _)) => {
                    dirs.insert(dir);
                }
                None => {
                    files.insert(rest);
                }
            }
        }

        let mut entries: Vec<SourceEntry> = dirs
            .into_iter()
            .map(SourceEntry::directory)
            .chain(files.into_iter().map(SourceEntry::file))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> SproutResult<SourceFile> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| source_error(path, "no such template file"))
    }

    fn is_dir(&self, path: &str) -> bool {
        let prefix = Self::prefix(path);
        self.files.keys().any(|k| k.starts_with(&prefix))
    }
}
