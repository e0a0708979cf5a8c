//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod list;
pub mod new;
pub mod version;

use std::path::PathBuf;

use sprout_adapters::{DirectoryTemplates, EmbeddedTemplates};
use sprout_core::application::ports::TemplateSource;
use tracing::debug;

use crate::{config::AppConfig, error::CliResult};

/// Overrides the template collection for a single invocation.
pub const TEMPLATES_DIR_ENV: &str = "SPROUT_TEMPLATES_DIR";

/// Pick the template collection: `SPROUT_TEMPLATES_DIR`, then
/// `templates.local_path`, then the bundled templates.
pub fn template_source(config: &AppConfig) -> CliResult<Box<dyn TemplateSource>> {
    let local = std::env::var_os(TEMPLATES_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.templates.local_path.clone());

    match local {
        Some(dir) => Ok(Box::new(DirectoryTemplates::new(dir)?)),
        None => {
            debug!("using bundled templates");
            Ok(Box::new(EmbeddedTemplates::new()))
        }
    }
}
