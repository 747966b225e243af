//! Path and file helpers.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Collapse `.` and `..` components lexically, without touching the filesystem.
///
/// An absolute path never loses its anchor: `..` directly under the root
/// stays at the root. Leading `..` in a relative path is preserved, since
/// there is nothing to pop it against.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_dot_segments() {
        assert_eq!(
            normalize_path(Path::new("/project/./content/src")),
            PathBuf::from("/project/content/src")
        );
        assert_eq!(
            normalize_path(Path::new("/project/content/../common/src")),
            PathBuf::from("/project/common/src")
        );
    }

    #[test]
    fn test_normalize_keeps_absolute_anchor() {
        assert_eq!(normalize_path(Path::new("/../src")), PathBuf::from("/src"));
        assert_eq!(normalize_path(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_preserves_leading_parent_in_relative_paths() {
        assert_eq!(
            normalize_path(Path::new("../common/src")),
            PathBuf::from("../common/src")
        );
        assert_eq!(normalize_path(Path::new("a/../b")), PathBuf::from("b"));
    }
}
