//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprout-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateSource`: the read-only template collection
//!   - `Filesystem`: destination writes
//!   - `CommandRunner`: external version-control commands

pub mod output;

pub use output::{
    CommandFailure, CommandRunner, EntryKind, Filesystem, PathKind, SourceEntry, SourceFile,
    TemplateSource,
};

#[cfg(test)]
pub use output::MockCommandRunner;
