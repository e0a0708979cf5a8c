//! Variables available to `.tmpl` files.

use chrono::Datelike;

/// Author used when no override is given and the user cannot be identified.
pub const FALLBACK_AUTHOR: &str = "author";

/// The fixed set of fields a template may reference.
///
/// Derived once per invocation and read-only during rendering.
///
/// | Field         | Template syntax      | Default                         |
/// |---------------|----------------------|---------------------------------|
/// | `ProjectName` | `{{.ProjectName}}`   | the project name                |
/// | `ModulePath`  | `{{.ModulePath}}`    | the project name                |
/// | `Author`      | `{{.Author}}`        | `$USER`, `$USERNAME`, `"author"` |
/// | `Year`        | `{{.Year}}`          | current local year              |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    pub project_name: String,
    pub module_path: String,
    pub author: String,
    pub year: i32,
}

impl TemplateVars {
    /// Field names recognised by the renderer, in display order.
    pub const FIELDS: [&'static str; 4] = ["ProjectName", "ModulePath", "Author", "Year"];

    /// Derive the variables for one invocation.
    ///
    /// Empty `module_path` / `author` values are treated as absent.
    pub fn derive(project_name: &str, module_path: Option<&str>, author: Option<&str>) -> Self {
        let module_path = module_path
            .filter(|m| !m.is_empty())
            .unwrap_or(project_name)
            .to_string();

        let author = author
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .unwrap_or_else(current_user);

        Self {
            project_name: project_name.to_string(),
            module_path,
            author,
            year: chrono::Local::now().year(),
        }
    }

    /// Look up a field by its template name.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "ProjectName" => Some(self.project_name.clone()),
            "ModulePath" => Some(self.module_path.clone()),
            "Author" => Some(self.author.clone()),
            "Year" => Some(self.year.to_string()),
            _ => None,
        }
    }
}

fn current_user() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_AUTHOR.to_string())
}
