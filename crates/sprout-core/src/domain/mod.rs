//! Core domain layer for Sprout.
//!
//! Pure logic with no I/O: project-name rules, the template variable set,
//! the `{{.Field}}` renderer, and the immutable [`Options`] value that is
//! threaded through one invocation of the pipeline.
//!
//! Everything that touches the filesystem, the template collection, or an
//! external process is reached through the ports in
//! [`crate::application::ports`].

pub mod error;
pub mod file_mode;
pub mod name;
pub mod options;
pub mod render;
pub mod vars;

pub use error::{DomainError, ErrorCategory};
pub use file_mode::{FileMode, TEMPLATE_MARKER, strip_marker};
pub use name::{MAX_PROJECT_NAME_LEN, validate_project_name};
pub use options::{Options, OptionsBuilder};
pub use render::{RenderError, render_template};
pub use vars::TemplateVars;
