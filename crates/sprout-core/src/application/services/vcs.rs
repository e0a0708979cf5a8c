//! Version-Control Initializer - `init`, `add .`, `commit`.

use std::fmt;
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::CommandRunner},
    error::SproutResult,
};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// One of the three repository steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsStep {
    Init,
    Add,
    Commit,
}

impl VcsStep {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Add => "add",
            Self::Commit => "commit",
        }
    }
}

impl fmt::Display for VcsStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the fixed command sequence through a [`CommandRunner`].
pub struct VcsInitializer<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> VcsInitializer<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// The steps and their argument lists, in execution order.
    pub fn plan(signoff: bool) -> [(VcsStep, Vec<String>); 3] {
        let mut commit = vec!["commit".to_string()];
        if signoff {
            commit.push("-s".into());
        }
        commit.extend(["-m".to_string(), INITIAL_COMMIT_MESSAGE.to_string()]);

        [
            (VcsStep::Init, vec!["init".into()]),
            (VcsStep::Add, vec!["add".into(), ".".into()]),
            (VcsStep::Commit, commit),
        ]
    }

    /// Initialise a repository in `dir` and record one commit.
    ///
    /// Stops at the first failing step; nothing is retried.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn init_repo(&self, dir: &Path, signoff: bool) -> SproutResult<()> {
        for (step, args) in Self::plan(signoff) {
            debug!(%step, ?args, "running vcs step");
            self.runner
                .run(dir, &args)
                .map_err(|failure| ApplicationError::VcsCommandFailed {
                    step,
                    reason: failure.reason,
                    output: failure.output,
                })?;
        }
        Ok(())
    }
}
