//! Directory Copier - mirrors one language subtree onto the filesystem.
//!
//! The walk is depth-first in the order the source lists entries. Files whose
//! name ends in [`TEMPLATE_MARKER`](crate::domain::TEMPLATE_MARKER) are
//! rendered and written without the marker; every other file is copied
//! byte-for-byte. Each created path is announced on the progress sink after it
//! exists, so a directory always appears before its children.
//!
//! A failure aborts the walk immediately. Whatever was written before the
//! failure stays on disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, SourceEntry, TemplateSource},
        services::progress,
    },
    domain::{FileMode, TemplateVars, render_template, strip_marker},
    error::SproutResult,
};

/// Paths produced by a copy or a preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Logical paths (prefixed with the display root) in creation order.
    pub created: Vec<PathBuf>,
    /// Number of marked files that went through the renderer.
    pub rendered: usize,
}

/// What the walk does at each entry.
enum Walk<'a> {
    Write { dest: &'a Path, vars: &'a TemplateVars },
    Preview,
}

/// Recursive template walker.
pub struct DirectoryCopier<'a> {
    source: &'a dyn TemplateSource,
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryCopier<'a> {
    pub fn new(source: &'a dyn TemplateSource, filesystem: &'a dyn Filesystem) -> Self {
        Self { source, filesystem }
    }

    /// Copy `language`'s subtree into `dest`, rendering marked files.
    ///
    /// `label` is the prefix used for progress lines and for the paths in the
    /// returned report (normally the project name).
    #[instrument(skip_all, fields(language = %language, dest = %dest.display()))]
    pub fn copy(
        &self,
        language: &str,
        dest: &Path,
        label: &Path,
        vars: &TemplateVars,
        out: &mut dyn Write,
    ) -> SproutResult<CopyReport> {
        self.filesystem.create_dir_all(dest)?;

        let mut report = CopyReport::default();
        self.walk(language, &Walk::Write { dest, vars }, label, out, &mut report)?;

        debug!(
            entries = report.created.len(),
            rendered = report.rendered,
            "template tree copied"
        );
        Ok(report)
    }

    /// Report what [`copy`](Self::copy) would create, without rendering or
    /// touching the filesystem.
    #[instrument(skip(self, out))]
    pub fn preview(
        &self,
        language: &str,
        label: &Path,
        out: &mut dyn Write,
    ) -> SproutResult<CopyReport> {
        let mut report = CopyReport::default();
        self.walk(language, &Walk::Preview, label, out, &mut report)?;
        Ok(report)
    }

    fn walk(
        &self,
        src: &str,
        mode: &Walk<'_>,
        label: &Path,
        out: &mut dyn Write,
        report: &mut CopyReport,
    ) -> SproutResult<()> {
        for entry in self.source.list_dir(src)? {
            let src_path = join_source(src, &entry.name);

            if entry.is_dir() {
                self.walk_directory(&entry, &src_path, mode, label, out, report)?;
                continue;
            }

            let (dest_name, marked) = strip_marker(&entry.name);
            let label_path = label.join(dest_name);

            if let Walk::Write { dest, vars } = mode {
                let file = self.source.read_file(&src_path)?;
                let content = if marked {
                    report.rendered += 1;
                    render_template(&file.contents, vars).map_err(|source| {
                        ApplicationError::RenderingFailed {
                            path: src_path.clone(),
                            source,
                        }
                    })?
                } else {
                    file.contents
                };

                self.filesystem.write_file(
                    &dest.join(dest_name),
                    &content,
                    FileMode::from_source(file.mode),
                )?;
            }

            progress(out, format_args!("  create {}", label_path.display()));
            report.created.push(label_path);
        }

        Ok(())
    }

    fn walk_directory(
        &self,
        entry: &SourceEntry,
        src_path: &str,
        mode: &Walk<'_>,
        label: &Path,
        out: &mut dyn Write,
        report: &mut CopyReport,
    ) -> SproutResult<()> {
        let label_path = label.join(&entry.name);

        let child_mode = match mode {
            Walk::Write { dest, vars } => {
                let dest_path = dest.join(&entry.name);
                self.filesystem.create_dir_all(&dest_path)?;
                Some((dest_path, *vars))
            }
            Walk::Preview => None,
        };

        progress(out, format_args!("  create {}/", label_path.display()));
        report.created.push(label_path.clone());

        match &child_mode {
            Some((dest, vars)) => self.walk(
                src_path,
                &Walk::Write { dest, vars },
                &label_path,
                out,
                report,
            ),
            None => self.walk(src_path, &Walk::Preview, &label_path, out, report),
        }
    }
}

/// Join a slash-delimited source path.
fn join_source(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_paths_use_forward_slashes() {
        assert_eq!(join_source("", "go"), "go");
        assert_eq!(join_source("go", "cmd"), "go/cmd");
        assert_eq!(join_source("go/cmd", "main.go.tmpl"), "go/cmd/main.go.tmpl");
    }
}
