//! `sprout config`: inspect configuration values.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    config: &AppConfig,
    explicit: Option<&Path>,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).map_err(|message| CliError::ConfigError {
                message: format!("{message}; known keys: {}", AppConfig::KEYS.join(", ")),
                source: None,
            })?;
            output.data(value.as_deref().unwrap_or(""))?;
        }

        ConfigCommands::List => {
            let serialised =
                toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                    message: format!("failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(AppConfig::default_path);
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}
