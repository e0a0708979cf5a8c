//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::version::BuildInfo;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = BuildInfo::current().short(),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold new projects from language templates",
    long_about = "Sprout creates a project directory from a bundled language \
                  template, fills in the project details, and makes the \
                  initial git commit.",
    after_help = "EXAMPLES:\n\
        \x20 sprout new my-tool --lang rust\n\
        \x20 sprout new my-svc  --lang go -m github.com/me/my-svc --signoff\n\
        \x20 sprout new my-lib  --lang python --dry-run\n\
        \x20 sprout list\n\
        \x20 sprout completions bash > /usr/share/bash-completion/completions/sprout",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a template.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 sprout new my-project --lang rust\n\
            \x20 sprout new my-api     --lang go --module example.com/my-api\n\
            \x20 sprout new my-app     --lang c --dir ~/src --force"
    )]
    New(NewArgs),

    /// List available languages.
    #[command(
        visible_alias = "ls",
        about = "List available languages",
        after_help = "EXAMPLES:\n\
            \x20 sprout list\n\
            \x20 sprout list --format json"
    )]
    List(ListArgs),

    /// Print build information.
    #[command(
        about = "Show version information",
        after_help = "EXAMPLES:\n\
            \x20 sprout version\n\
            \x20 sprout version -v"
    )]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprout completions bash > ~/.local/share/bash-completion/completions/sprout\n\
            \x20 sprout completions zsh  > ~/.zfunc/_sprout\n\
            \x20 sprout completions fish > ~/.config/fish/completions/sprout.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sprout configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprout config path\n\
            \x20 sprout config get defaults.language\n\
            \x20 sprout config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sprout new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; also the name of the created directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template language. Falls back to `defaults.language` in the config.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        help = "Template language (see `sprout list`)"
    )]
    pub language: Option<String>,

    /// Module path for languages that have one (Go). Defaults to NAME.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "PATH",
        help = "Module path (default: project name)"
    )]
    pub module: Option<String>,

    /// Author recorded in generated files.
    #[arg(long = "author", value_name = "NAME", help = "Author name (default: $USER)")]
    pub author: Option<String>,

    /// Parent directory of the new project.
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        help = "Create the project inside DIR (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Add a Signed-off-by trailer to the initial commit.
    #[arg(long = "signoff", help = "Sign off the initial commit")]
    pub signoff: bool,

    /// Preview what would be created without writing any files.
    #[arg(
        short = 'n',
        long = "dry-run",
        help = "Show what would be created without creating"
    )]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "plain",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One name per line.
    Plain,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprout completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprout config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.language`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
