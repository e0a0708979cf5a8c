//! Application services - orchestrate use cases.
//!
//! [`Creator`] drives one project creation end to end; it leans on the
//! [`DirectoryCopier`] for the template walk and on the [`VcsInitializer`]
//! for the initial commit.

pub mod copier;
pub mod creator;
pub mod vcs;

pub use copier::{CopyReport, DirectoryCopier};
pub use creator::{CreateOutcome, Creator};
pub use vcs::{INITIAL_COMMIT_MESSAGE, VcsInitializer, VcsStep};

use std::fmt::Display;
use std::io::Write;

/// Write one progress line. A closed or full output sink never fails the
/// pipeline.
pub(crate) fn progress(out: &mut dyn Write, line: impl Display) {
    let _ = writeln!(out, "{line}");
}
