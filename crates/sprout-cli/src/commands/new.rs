//! Implementation of the `sprout new` command.
//!
//! Responsibility: merge CLI arguments with configuration into `Options`,
//! wire the production adapters into a `Creator`, and run it. No business
//! logic lives here.

use tracing::{debug, instrument};

use sprout_adapters::{GitRunner, LocalFilesystem};
use sprout_core::{application::Creator, domain::Options};

use crate::{
    cli::NewArgs,
    commands::template_source,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sprout new` command.
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let source = template_source(config)?;

    let Some(language) = args.language.clone().or_else(|| config.defaults.language.clone())
    else {
        return Err(CliError::MissingLanguage {
            available: source.languages().unwrap_or_default(),
        });
    };

    let options = build_options(language, args, config);
    debug!(
        language = options.language(),
        destination = %options.destination().display(),
        force = options.force(),
        dry_run = options.dry_run(),
        "options resolved"
    );

    let git = GitRunner::new().with_timeout(config.vcs.timeout());
    let creator = Creator::new(source, Box::new(LocalFilesystem::new()), Box::new(git));

    let mut progress = output.progress();
    creator.create(options, &mut progress)?;
    Ok(())
}

/// Flags win over config values.
fn build_options(language: String, args: NewArgs, config: &AppConfig) -> Options {
    let mut builder = Options::builder(language, args.name)
        .force(args.force)
        .signoff(args.signoff || config.defaults.signoff)
        .dry_run(args.dry_run);

    if let Some(module) = args.module {
        builder = builder.module_path(module);
    }
    if let Some(author) = args.author.or_else(|| config.defaults.author.clone()) {
        builder = builder.author(author);
    }
    if let Some(dir) = args.dir {
        builder = builder.output_dir(dir);
    }

    builder.build()
}
