use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Every file the setup pipeline writes is addressed relative to the project
/// directory, so nothing can land outside it.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute. Plan paths are compile-time constants.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {path:?}"
        );
        Self(path)
    }

    /// Resolve against a root directory.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_under_project_root() {
        let entry = RelativePath::new("src/Module.ts");
        assert_eq!(
            entry.under(Path::new("/work/module-auth")),
            PathBuf::from("/work/module-auth/src/Module.ts")
        );
        assert_eq!(entry.to_string(), "src/Module.ts");
    }

    #[test]
    #[should_panic]
    fn rejects_absolute() {
        RelativePath::new("/etc/passwd");
    }
}
