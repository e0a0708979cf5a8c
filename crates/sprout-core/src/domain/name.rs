//! Project name rules.
//!
//! The project name becomes a directory name and is handed to `git` as a
//! working directory, so this check is the only thing standing between the
//! command line and a path like `../../etc`.

use crate::domain::error::DomainError;

pub const MAX_PROJECT_NAME_LEN: usize = 255;

/// Check that `name` is a safe directory name.
///
/// Accepts `^[A-Za-z][A-Za-z0-9._-]{0,254}$`.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidProjectName {
        name: name.to_string(),
        reason,
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("name must not be empty".into()));
    };

    if name.len() > MAX_PROJECT_NAME_LEN {
        return Err(invalid(format!(
            "name must be at most {MAX_PROJECT_NAME_LEN} characters, got {}",
            name.len()
        )));
    }

    if !first.is_ascii_alphabetic() {
        return Err(invalid("name must start with a letter".into()));
    }

    if let Some(bad) = chars.find(|c| !is_name_char(*c)) {
        return Err(invalid(format!(
            "character {bad:?} is not allowed; use only [a-zA-Z0-9._-]"
        )));
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}
