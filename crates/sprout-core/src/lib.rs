//! Sprout Core - the template-copy pipeline.
//!
//! This crate provides the domain and application layers for the Sprout
//! project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprout-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Creator, DirectoryCopier, VcsInit)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (TemplateSource, Filesystem, Commands)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprout-adapters (Infrastructure)    │
//! │ (EmbeddedTemplates, LocalFilesystem,    │
//! │  GitRunner, ...)                        │
//! └─────────────────────────────────────────┘
//!
//!          Domain layer (pure logic):
//!   name validation, TemplateVars, renderer
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sprout_core::prelude::*;
//! # fn adapters() -> (Box<dyn TemplateSource>, Box<dyn Filesystem>, Box<dyn CommandRunner>) { todo!() }
//!
//! let (source, filesystem, vcs) = adapters();
//! let creator = Creator::new(source, filesystem, vcs);
//!
//! let options = Options::builder("go", "demo")
//!     .module_path("github.com/me/demo")
//!     .build();
//!
//! creator.create(options, &mut std::io::stdout()).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CopyReport, Creator, CreateOutcome, DirectoryCopier, VcsInitializer,
        ports::{
            CommandFailure, CommandRunner, EntryKind, Filesystem, PathKind, SourceEntry,
            SourceFile, TemplateSource,
        },
    };
    pub use crate::domain::{
        FileMode, Options, OptionsBuilder, RenderError, TEMPLATE_MARKER, TemplateVars,
        render_template, strip_marker, validate_project_name,
    };
    pub use crate::error::{ErrorKind, SproutError, SproutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
