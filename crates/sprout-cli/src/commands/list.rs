//! Implementation of the `sprout list` command.

use crate::{
    cli::{ListArgs, ListFormat},
    commands::template_source,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let languages = template_source(config)?.languages()?;

    match args.format {
        ListFormat::Plain => {
            for language in &languages {
                output.data(language)?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string(&languages).map_err(|e| CliError::IoError {
                message: format!("failed to encode language list: {e}"),
                source: e.into(),
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}
