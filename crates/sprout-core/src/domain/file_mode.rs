//! Template marker handling and destination permission bits.

use std::fmt;

/// Filename suffix that opts a file into rendering.
///
/// `go.mod.tmpl` is rendered and written as `go.mod`; `go.sum` is copied
/// byte-for-byte. Only the presence of the marker decides templating.
pub const TEMPLATE_MARKER: &str = ".tmpl";

/// Strip [`TEMPLATE_MARKER`] from a file name.
///
/// Returns the destination name and whether the marker was present. A file
/// named exactly `.tmpl` is not treated as marked since stripping would leave
/// an empty name.
pub fn strip_marker(name: &str) -> (&str, bool) {
    match name.strip_suffix(TEMPLATE_MARKER) {
        Some(stripped) if !stripped.is_empty() => (stripped, true),
        _ => (name, false),
    }
}

/// Unix permission bits for a scaffolded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// `rw-r--r--`, used when the source carries no permission info.
    pub const DEFAULT: Self = Self(0o644);

    /// `rwxr-xr-x`.
    pub const EXECUTABLE: Self = Self(0o755);

    pub const fn new(bits: u32) -> Self {
        Self(bits & 0o777)
    }

    /// Mode for a destination file given the source's (optional) mode.
    pub fn from_source(mode: Option<u32>) -> Self {
        mode.map_or(Self::DEFAULT, Self::new)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_executable(self) -> bool {
        self.0 & 0o111 != 0
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}
