//! Template source adapters.

mod directory;
mod embedded;
mod memory;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;
pub use memory::MemoryTemplates;

use sprout_core::{application::ApplicationError, error::SproutError};

fn source_error(path: &str, reason: impl Into<String>) -> SproutError {
    ApplicationError::TemplateSource {
        path: path.to_string(),
        reason: reason.into(),
    }
    .into()
}
