//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// # Example
/// ```ignore
/// let root = normalize_path(Path::new("."));
/// ```
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/that/does/not/exist");
        assert_eq!(normalize_path(path), PathBuf::from("/absolute/path/that/does/not/exist"));
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/site"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/site"));
    }

    #[test]
    fn test_normalize_existing_dir_is_canonical() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dotted = tmp.path().join("a/..");
        std::fs::create_dir(tmp.path().join("a")).unwrap();
        assert_eq!(normalize_path(&dotted), tmp.path().canonicalize().unwrap());
    }
}
