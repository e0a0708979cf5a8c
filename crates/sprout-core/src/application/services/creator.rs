//! Creator - the project creation pipeline.
//!
//! This service coordinates the entire workflow:
//! 1. Validate the project name
//! 2. Check the language exists in the template source
//! 3. Announce the project
//! 4. Dry run: list what would be created and stop
//! 5. Check (and under `--force`, clear) the destination
//! 6. Copy and render the template tree
//! 7. Initialise the repository
//!
//! Each step returns early on failure. Steps 1-2 run before anything is
//! printed or written.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ConflictKind,
        ports::{CommandRunner, Filesystem, PathKind, TemplateSource},
        services::{DirectoryCopier, VcsInitializer, progress},
    },
    domain::{Options, TemplateVars, validate_project_name},
    error::SproutResult,
};

/// Result of a successful [`Creator::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// `output_dir/project_name`.
    pub destination: PathBuf,
    /// Logical paths created (or that would be created, on a dry run).
    pub created: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Scaffolds new projects from a template source.
pub struct Creator {
    source: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn CommandRunner>,
}

impl Creator {
    /// Create a new creator with the given adapters.
    pub fn new(
        source: Box<dyn TemplateSource>,
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            source,
            filesystem,
            vcs,
        }
    }

    /// Scaffold a new project, writing progress lines to `out`.
    #[instrument(
        skip_all,
        fields(
            language = %options.language(),
            project = %options.project_name(),
            dry_run = options.dry_run()
        )
    )]
    pub fn create(&self, options: Options, out: &mut dyn Write) -> SproutResult<CreateOutcome> {
        validate_project_name(options.project_name())?;
        self.check_language(options.language())?;

        progress(
            out,
            format_args!(
                "Creating project with language: {}, project name: {}",
                options.language(),
                options.project_name()
            ),
        );

        let copier = DirectoryCopier::new(self.source.as_ref(), self.filesystem.as_ref());
        let label = Path::new(options.project_name());
        let destination = options.destination();

        if options.dry_run() {
            progress(out, "Dry-run mode: no files will be created");
            let report = copier.preview(options.language(), label, out)?;
            return Ok(CreateOutcome {
                destination,
                created: report.created,
                dry_run: true,
            });
        }

        self.prepare_destination(&destination, options.force(), out)?;

        let vars = TemplateVars::derive(
            options.project_name(),
            options.module_path(),
            options.author(),
        );
        let report = copier.copy(options.language(), &destination, label, &vars, out)?;

        VcsInitializer::new(self.vcs.as_ref()).init_repo(&destination, options.signoff())?;

        info!(files = report.created.len(), "project created");
        progress(out, "Project created successfully");

        Ok(CreateOutcome {
            destination,
            created: report.created,
            dry_run: false,
        })
    }

    /// The languages available in the template source.
    pub fn list_languages(&self) -> SproutResult<Vec<String>> {
        self.source.languages()
    }

    fn check_language(&self, language: &str) -> SproutResult<()> {
        // Only a single path segment can name a top-level directory.
        let single_segment = !language.is_empty()
            && !language.contains(['/', '\\'])
            && language != "."
            && language != "..";

        if single_segment && self.source.is_dir(language) {
            return Ok(());
        }

        Err(ApplicationError::UnsupportedLanguage {
            language: language.to_string(),
            available: self.source.languages().unwrap_or_default(),
        }
        .into())
    }

    fn prepare_destination(
        &self,
        destination: &Path,
        force: bool,
        out: &mut dyn Write,
    ) -> SproutResult<()> {
        let conflict = |conflict| ApplicationError::DestinationConflict {
            path: destination.to_path_buf(),
            conflict,
        };

        match self.filesystem.path_kind(destination)? {
            PathKind::Missing => Ok(()),
            PathKind::File => Err(conflict(ConflictKind::NotADirectory).into()),
            PathKind::Directory if !force => Err(conflict(ConflictKind::AlreadyExists).into()),
            PathKind::Directory => {
                // Never delete the old tree if the new one cannot be created.
                let parent = destination
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                self.filesystem.ensure_writable(parent)?;

                warn!(path = %destination.display(), "removing existing directory due to --force");
                progress(
                    out,
                    format_args!(
                        "Warning: directory {:?} already exists, removing due to --force",
                        destination.display().to_string()
                    ),
                );
                self.filesystem.remove_dir_all(destination)
            }
        }
    }
}
