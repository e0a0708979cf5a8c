//! Unified error handling for Sprout Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCategory};

/// Root error type for Sprout Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SproutError {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// The failure taxonomy of one `create` invocation.
///
/// Every error is terminal for the invocation; none is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidName,
    UnsupportedLanguage,
    DestinationConflict,
    FilesystemIo,
    TemplateRender,
    VcsCommandFailure,
}

impl SproutError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// Which kind of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::InvalidProjectName { .. }) => ErrorKind::InvalidName,
            Self::Application(e) => e.kind(),
        }
    }
}

/// Convenient result type alias.
pub type SproutResult<T> = Result<T, SproutError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::ConflictKind;
    use crate::domain::RenderError;

    #[test]
    fn messages_are_not_prefixed() {
        let err: SproutError = ApplicationError::UnsupportedLanguage {
            language: "cobol".into(),
            available: vec!["go".into()],
        }
        .into();
        assert_eq!(err.to_string(), "unsupported language: cobol");
    }

    #[test]
    fn kinds_follow_the_taxonomy() {
        let name: SproutError = DomainError::InvalidProjectName {
            name: "1x".into(),
            reason: "r".into(),
        }
        .into();
        assert_eq!(name.kind(), ErrorKind::InvalidName);

        let conflict: SproutError = ApplicationError::DestinationConflict {
            path: PathBuf::from("demo"),
            conflict: ConflictKind::AlreadyExists,
        }
        .into();
        assert_eq!(conflict.kind(), ErrorKind::DestinationConflict);

        let render: SproutError = ApplicationError::RenderingFailed {
            path: "go/main.go.tmpl".into(),
            source: RenderError::NotUtf8,
        }
        .into();
        assert_eq!(render.kind(), ErrorKind::TemplateRender);
    }

    #[test]
    fn categories_drive_display() {
        let err: SproutError = DomainError::InvalidProjectName {
            name: "".into(),
            reason: "empty".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
