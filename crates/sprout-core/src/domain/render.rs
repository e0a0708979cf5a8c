//! Minimal `{{.Field}}` renderer.
//!
//! Only files carrying the template marker reach this function. Inside such
//! a file every action must be a well-formed reference to a known field;
//! anything else is a hard error rather than silently emitting an empty
//! value or falling back to the raw text.

use thiserror::Error;

use crate::domain::vars::TemplateVars;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Why a template body could not be rendered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unclosed action starting at byte {offset}")]
    Unclosed { offset: usize },

    #[error("invalid action {{{{{action}}}}}: expected {{{{.Field}}}}")]
    InvalidAction { action: String },

    #[error("unknown field {field:?} (available: {})", TemplateVars::FIELDS.join(", "))]
    UnknownField { field: String },

    #[error("template content is not valid UTF-8")]
    NotUtf8,
}

/// Substitute `vars` into `content`.
///
/// Whitespace inside the delimiters is ignored: `{{ .Year }}` is the same
/// action as `{{.Year}}`. Text outside actions, including stray `}}`, is
/// emitted unchanged.
pub fn render_template(content: &[u8], vars: &TemplateVars) -> Result<Vec<u8>, RenderError> {
    let text = std::str::from_utf8(content).map_err(|_| RenderError::NotUtf8)?;

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);

        let body_start = start + OPEN.len();
        let Some(len) = rest[body_start..].find(CLOSE) else {
            return Err(RenderError::Unclosed {
                offset: offset + start,
            });
        };

        let action = rest[body_start..body_start + len].trim();
        let field = parse_field(action)?;
        let value = vars
            .field(field)
            .ok_or_else(|| RenderError::UnknownField {
                field: field.to_string(),
            })?;
        out.push_str(&value);

        let consumed = body_start + len + CLOSE.len();
        offset += consumed;
        rest = &rest[consumed..];
    }

    out.push_str(rest);
    Ok(out.into_bytes())
}

/// `.Ident` -> `Ident`
fn parse_field(action: &str) -> Result<&str, RenderError> {
    action
        .strip_prefix('.')
        .filter(|ident| is_identifier(ident))
        .ok_or_else(|| RenderError::InvalidAction {
            action: action.to_string(),
        })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars {
        TemplateVars {
            project_name: "testproj".into(),
            module_path: "github.com/user/testproj".into(),
            author: "testuser".into(),
            year: 2025,
        }
    }

    fn render(content: &str) -> Result<String, RenderError> {
        render_template(content.as_bytes(), &vars()).map(|b| String::from_utf8(b).unwrap())
    }

    #[test]
    fn simple_variable() {
        assert_eq!(
            render("module {{.ModulePath}}").unwrap(),
            "module github.com/user/testproj"
        );
    }

    #[test]
    fn multiple_variables() {
        assert_eq!(
            render("# {{.ProjectName}}\nBy {{.Author}} ({{.Year}})").unwrap(),
            "# testproj\nBy testuser (2025)"
        );
    }

    #[test]
    fn whitespace_inside_delimiters() {
        assert_eq!(render("{{ .ProjectName }}").unwrap(), "testproj");
    }

    #[test]
    fn adjacent_actions() {
        assert_eq!(
            render("{{.ProjectName}}{{.ProjectName}}").unwrap(),
            "testprojtestproj"
        );
    }

    #[test]
    fn no_template_syntax() {
        assert_eq!(render("plain text content").unwrap(), "plain text content");
        assert_eq!(render("").unwrap(), "");
    }

    #[test]
    fn stray_closing_delimiter_is_text() {
        assert_eq!(render("a }} b { c }").unwrap(), "a }} b { c }");
    }

    #[test]
    fn unclosed_action_is_an_error() {
        assert_eq!(
            render("name: {{.ProjectName").unwrap_err(),
            RenderError::Unclosed { offset: 6 }
        );
    }

    #[test]
    fn unknown_field_is_an_error() {
        assert_eq!(
            render("{{.Nonexistent}}").unwrap_err(),
            RenderError::UnknownField {
                field: "Nonexistent".into()
            }
        );
    }

    #[test]
    fn malformed_actions_are_errors() {
        for body in ["{{ProjectName}}", "{{.}}", "{{.A.B}}", "{{}}", "{{. Year}}"] {
            assert!(
                matches!(render(body), Err(RenderError::InvalidAction { .. })),
                "accepted: {body}"
            );
        }
    }

    #[test]
    fn invalid_action_message_shows_braces() {
        let err = render("{{ProjectName}}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid action {{ProjectName}}: expected {{.Field}}"
        );
    }

    #[test]
    fn non_utf8_content_is_an_error() {
        assert_eq!(
            render_template(&[0xff, 0xfe], &vars()).unwrap_err(),
            RenderError::NotUtf8
        );
    }
}
