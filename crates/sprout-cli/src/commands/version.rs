//! Implementation of the `sprout version` command.

use crate::{error::CliResult, output::OutputManager, version::BuildInfo};

pub fn execute(verbose: bool, output: &OutputManager) -> CliResult<()> {
    let info = BuildInfo::current();
    if verbose {
        output.data(info.verbose().trim_end())?;
    } else {
        output.data(&info.short())?;
    }
    Ok(())
}
