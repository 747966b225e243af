//! Anchoring context for definition units.
//!
//! Source directories are declared relative to the unit that defines
//! them, not to the process working directory, so a definition unit can
//! be relocated without editing. The defining location is passed in
//! explicitly; nothing here reads ambient state or probes the
//! filesystem.

use std::path::{Path, PathBuf};

use crate::util::diagnostic::DefinitionError;
use crate::util::fs::normalize_path;

/// The location of a definition unit, used to anchor source directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionContext {
    root: PathBuf,
}

impl DefinitionContext {
    /// Create a context rooted at an absolute directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, DefinitionError> {
        let root = root.into();
        if !root.is_absolute() {
            return Err(DefinitionError::UnanchoredRoot { path: root });
        }
        Ok(DefinitionContext {
            root: normalize_path(&root),
        })
    }

    /// Create a context rooted at the directory containing `file`.
    ///
    /// This is the usual entry point: the defining document's own path
    /// anchors every relative source directory it declares.
    pub fn for_file(file: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let file = file.as_ref();
        let root = file.parent().unwrap_or(file);
        Self::new(root)
    }

    /// Get the anchoring directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a declared source directory to an absolute path.
    ///
    /// Absolute declarations pass through untouched; relative ones are
    /// joined to the root. Either way `.` and `..` segments are
    /// collapsed lexically, so the result is stable across hosts even
    /// when the directory does not exist yet.
    pub fn resolve(&self, dir: impl AsRef<Path>) -> PathBuf {
        let dir = dir.as_ref();
        if dir.is_absolute() {
            normalize_path(dir)
        } else {
            normalize_path(&self.root.join(dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_root_rejected() {
        let err = DefinitionContext::new("relative/dir").unwrap_err();
        assert!(matches!(err, DefinitionError::UnanchoredRoot { .. }));
    }

    #[test]
    fn test_for_file_anchors_at_parent() {
        let cx = DefinitionContext::for_file("/project/content/Targets.toml").unwrap();
        assert_eq!(cx.root(), Path::new("/project/content"));
    }

    #[test]
    fn test_resolve_joins_relative_dirs() {
        let cx = DefinitionContext::new("/project/content").unwrap();
        assert_eq!(cx.resolve("src"), PathBuf::from("/project/content/src"));
        assert_eq!(
            cx.resolve("../common/src"),
            PathBuf::from("/project/common/src")
        );
    }

    #[test]
    fn test_resolve_passes_absolute_dirs_through() {
        let cx = DefinitionContext::new("/project/content").unwrap();
        assert_eq!(cx.resolve("/opt/vendor/src"), PathBuf::from("/opt/vendor/src"));
    }
}
