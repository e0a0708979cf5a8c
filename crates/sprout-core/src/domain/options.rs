//! Per-invocation options.
//!
//! An [`Options`] value is built once from the command line and passed by
//! value into [`crate::application::Creator::create`]. There is no global
//! flag state: two invocations in the same process never see each other's
//! settings.

use std::path::{Path, PathBuf};

/// Everything one `create` call needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    language: String,
    project_name: String,
    module_path: Option<String>,
    author: Option<String>,
    output_dir: PathBuf,
    force: bool,
    signoff: bool,
    dry_run: bool,
}

impl Options {
    /// Start building options for `project_name` in `language`.
    pub fn builder(language: impl Into<String>, project_name: impl Into<String>) -> OptionsBuilder {
        OptionsBuilder {
            inner: Self {
                language: language.into(),
                project_name: project_name.into(),
                module_path: None,
                author: None,
                output_dir: PathBuf::from("."),
                force: false,
                signoff: false,
                dry_run: false,
            },
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn module_path(&self) -> Option<&str> {
        self.module_path.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Directory in which `<project_name>/` is created.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `output_dir/project_name`.
    pub fn destination(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn signoff(&self) -> bool {
        self.signoff
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Builder for [`Options`].
#[derive(Debug, Clone)]
#[must_use]
pub struct OptionsBuilder {
    inner: Options,
}

impl OptionsBuilder {
    pub fn module_path(mut self, module_path: impl Into<String>) -> Self {
        self.inner.module_path = Some(module_path.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.inner.author = Some(author.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.inner.output_dir = dir.into();
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.inner.force = force;
        self
    }

    pub fn signoff(mut self, signoff: bool) -> Self {
        self.inner.signoff = signoff;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.inner.dry_run = dry_run;
        self
    }

    pub fn build(self) -> Options {
        self.inner
    }
}
