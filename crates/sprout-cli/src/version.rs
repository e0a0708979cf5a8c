//! Build identification for `sprout version` and `--version`.

use std::fmt::Write as _;

/// What this binary was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Release tag, or the crate version for untagged builds.
    pub tag: &'static str,
    /// Abbreviated commit, when built from a git checkout.
    pub revision: Option<&'static str>,
    /// Uncommitted changes were present at build time.
    pub dirty: bool,
}

impl BuildInfo {
    /// Information baked in at compile time.
    pub fn current() -> Self {
        Self {
            tag: option_env!("SPROUT_BUILD_TAG")
                .filter(|t| !t.is_empty())
                .unwrap_or(env!("CARGO_PKG_VERSION")),
            revision: option_env!("SPROUT_GIT_REVISION").filter(|r| !r.is_empty()),
            dirty: option_env!("SPROUT_GIT_DIRTY") == Some("true"),
        }
    }

    /// `tag[:revision][-dirty]`
    pub fn short(&self) -> String {
        let mut out = self.tag.to_string();
        if let Some(revision) = self.revision {
            let _ = write!(out, ":{revision}");
        }
        if self.dirty {
            out.push_str("-dirty");
        }
        out
    }

    /// One `Key: value` line per field.
    pub fn verbose(&self) -> String {
        let mut out = format!("Tag: {}\n", self.tag);
        if let Some(revision) = self.revision {
            let _ = writeln!(out, "Revision: {revision}");
        }
        let _ = writeln!(out, "Dirty: {}", self.dirty);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: BuildInfo = BuildInfo {
        tag: "v1.2.0",
        revision: Some("abc1234"),
        dirty: false,
    };

    #[test]
    fn short_with_revision() {
        assert_eq!(CLEAN.short(), "v1.2.0:abc1234");
    }

    #[test]
    fn short_dirty() {
        let info = BuildInfo { dirty: true, ..CLEAN };
        assert_eq!(info.short(), "v1.2.0:abc1234-dirty");
    }

    #[test]
    fn short_without_revision() {
        let info = BuildInfo {
            revision: None,
            ..CLEAN
        };
        assert_eq!(info.short(), "v1.2.0");
    }

    #[test]
    fn verbose_lists_fields() {
        assert_eq!(CLEAN.verbose(), "Tag: v1.2.0\nRevision: abc1234\nDirty: false\n");
    }

    #[test]
    fn verbose_omits_unknown_revision() {
        let info = BuildInfo {
            revision: None,
            ..CLEAN
        };
        assert_eq!(info.verbose(), "Tag: v1.2.0\nDirty: false\n");
    }

    #[test]
    fn current_tag_is_never_empty() {
        assert!(!BuildInfo::current().tag.is_empty());
    }
}
