//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: the [`Creator`] pipeline, the [`DirectoryCopier`], and the
//!   [`VcsInitializer`]
//! - **Ports**: traits for the template collection, the filesystem, and
//!   external commands
//! - **Errors**: orchestration and I/O failures
//!
//! Business rules live in `crate::domain`; this layer sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CopyReport, CreateOutcome, Creator, DirectoryCopier, VcsInitializer, VcsStep,
};

pub use ports::{CommandRunner, Filesystem, TemplateSource};

pub use error::{ApplicationError, ConflictKind};
