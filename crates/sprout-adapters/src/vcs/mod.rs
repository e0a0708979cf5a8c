//! Version-control adapters.

mod git;

pub use git::{DEFAULT_TIMEOUT, GitRunner};
