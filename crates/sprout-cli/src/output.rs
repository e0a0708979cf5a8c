//! Output management.
//!
//! Everything the user is meant to read goes to stdout through
//! [`OutputManager`]; diagnostics go to stderr through `tracing`.

use std::io::{self, Write};

use console::Term;

use crate::cli::GlobalArgs;

/// Routes command output to stdout according to the global flags.
pub struct OutputManager {
    quiet: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            term: Term::stdout(),
        }
    }

    /// Data the user asked for (`list`, `config get`); printed even in quiet
    /// mode so scripts can capture it.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Sink for the line-per-path progress stream of `sprout new`.
    ///
    /// Lines are passed through unstyled; quiet mode discards them.
    pub fn progress(&self) -> Box<dyn Write> {
        if self.quiet {
            Box::new(io::sink())
        } else {
            Box::new(self.term.clone())
        }
    }
}
