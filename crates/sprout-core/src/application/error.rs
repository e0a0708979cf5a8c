//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::application::services::VcsStep;
use crate::domain::{ErrorCategory, RenderError};
use crate::error::ErrorKind;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No top-level directory with this name exists in the template source.
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        language: String,
        available: Vec<String>,
    },

    /// Something already occupies the destination path.
    #[error("destination {:?} {conflict}", .path.display().to_string())]
    DestinationConflict {
        path: PathBuf,
        conflict: ConflictKind,
    },

    /// Filesystem operation failed.
    #[error("filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The template collection could not be read.
    #[error("failed to read template {path:?}: {reason}")]
    TemplateSource { path: String, reason: String },

    /// A marked file failed to render.
    #[error("failed to render template {path}: {source}")]
    RenderingFailed {
        path: String,
        #[source]
        source: RenderError,
    },

    /// One of the `git` steps failed.
    #[error("git {step} failed: {reason}{}", format_output(.output))]
    VcsCommandFailed {
        step: VcsStep,
        reason: String,
        output: String,
    },
}

/// How the destination path conflicts with a new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    NotADirectory,
    AlreadyExists,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADirectory => f.write_str("already exists and is not a directory"),
            Self::AlreadyExists => f.write_str("already exists; use --force to overwrite"),
        }
    }
}

fn format_output(output: &str) -> String {
    let output = output.trim_end();
    if output.is_empty() {
        String::new()
    } else {
        format!("\n{output}")
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedLanguage { available, .. } => {
                let mut out = vec!["Supported languages:".to_string()];
                out.extend(available.iter().map(|l| format!("  • {l}")));
                out.push("Run 'sprout list' to see all languages".into());
                out
            }
            Self::DestinationConflict {
                path,
                conflict: ConflictKind::AlreadyExists,
            } => vec![
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
                format!("Remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::DestinationConflict {
                conflict: ConflictKind::NotADirectory,
                ..
            } => vec![
                "A file with the project's name is in the way".into(),
                "Choose a different project name or move the file".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::TemplateSource { .. } => vec![
                "The template collection may be incomplete".into(),
                "Check SPROUT_TEMPLATES_DIR or templates.local_path".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "Check the {{.Field}} placeholders in the template file".into(),
                "Available fields: ProjectName, ModulePath, Author, Year".into(),
            ],
            Self::VcsCommandFailed { .. } => vec![
                "Ensure git is installed and in your PATH".into(),
                "Configure git: git config --global user.name / user.email".into(),
                "Files were written; only the repository step failed".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedLanguage { .. } => ErrorCategory::NotFound,
            Self::DestinationConflict { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. }
            | Self::TemplateSource { .. }
            | Self::RenderingFailed { .. }
            | Self::VcsCommandFailed { .. } => ErrorCategory::Internal,
        }
    }

    pub(crate) fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedLanguage { .. } => ErrorKind::UnsupportedLanguage,
            Self::DestinationConflict { .. } => ErrorKind::DestinationConflict,
            Self::FilesystemError { .. } | Self::TemplateSource { .. } => ErrorKind::FilesystemIo,
            Self::RenderingFailed { .. } => ErrorKind::TemplateRender,
            Self::VcsCommandFailed { .. } => ErrorKind::VcsCommandFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_directory_message() {
        let err = ApplicationError::DestinationConflict {
            path: PathBuf::from("demo"),
            conflict: ConflictKind::NotADirectory,
        };
        assert_eq!(
            err.to_string(),
            "destination \"demo\" already exists and is not a directory"
        );
    }

    #[test]
    fn already_exists_suggests_force() {
        let err = ApplicationError::DestinationConflict {
            path: PathBuf::from("demo"),
            conflict: ConflictKind::AlreadyExists,
        };
        assert!(err.to_string().contains("already exists"));
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn vcs_failure_carries_step_and_output() {
        let err = ApplicationError::VcsCommandFailed {
            step: VcsStep::Commit,
            reason: "exit status: 128".into(),
            output: "Author identity unknown\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "git commit failed: exit status: 128\nAuthor identity unknown"
        );
    }

    #[test]
    fn vcs_failure_without_output_has_single_line() {
        let err = ApplicationError::VcsCommandFailed {
            step: VcsStep::Init,
            reason: "program not found".into(),
            output: String::new(),
        };
        assert_eq!(err.to_string(), "git init failed: program not found");
    }

    #[test]
    fn unsupported_language_lists_available() {
        let err = ApplicationError::UnsupportedLanguage {
            language: "cobol".into(),
            available: vec!["go".into(), "rust".into()],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("go")));
        assert!(suggestions.iter().any(|s| s.contains("rust")));
    }
}
