//! Templates compiled into the binary.

use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};
use sprout_core::{
    application::ports::{SourceEntry, SourceFile, TemplateSource},
    error::SproutResult,
};

use super::source_error;

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

include!(concat!(env!("OUT_DIR"), "/template_modes.rs"));

/// The template collection bundled with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    fn dir(&self, path: &str) -> Option<&'static Dir<'static>> {
        if path.is_empty() {
            Some(&TEMPLATES)
        } else {
            TEMPLATES.get_dir(path)
        }
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn list_dir(&self, path: &str) -> SproutResult<Vec<SourceEntry>> {
        let dir = self
            .dir(path)
            .ok_or_else(|| source_error(path, "no such template directory"))?;

        let mut entries: Vec<SourceEntry> = dir
            .entries()
            .iter()
            .filter_map(|entry| {
                let name = file_name(entry.path())?;
                Some(match entry {
                    DirEntry::Dir(_) => SourceEntry::directory(name),
                    DirEntry::File(_) => SourceEntry::file(name),
                })
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> SproutResult<SourceFile> {
        let file = TEMPLATES
            .get_file(path)
            .ok_or_else(|| source_error(path, "no such template file"))?;

        Ok(SourceFile {
            contents: file.contents().to_vec(),
            mode: recorded_mode(path),
        })
    }

    fn is_dir(&self, path: &str) -> bool {
        self.dir(path).is_some()
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn recorded_mode(path: &str) -> Option<u32> {
    TEMPLATE_MODES
        .binary_search_by(|(p, _)| (*p).cmp(path))
        .ok()
        .map(|i| TEMPLATE_MODES[i].1)
}
