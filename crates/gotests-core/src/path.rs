//! Source file paths and their test siblings.

use std::path::{Path, PathBuf};

const SOURCE_SUFFIX: &str = ".go";
const TEST_SUFFIX: &str = "_test.go";

/// Path of an analyzed source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourcePath(PathBuf);

impl SourcePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn is_test_path(&self) -> bool {
        self.file_name().ends_with(TEST_SUFFIX)
    }

    /// Sibling test file: `foo.go` becomes `foo_test.go`. Test paths are returned unchanged.
    pub fn test_path(&self) -> PathBuf {
        if self.is_test_path() {
            return self.0.clone();
        }
        let name = self.file_name();
        let stem = name.strip_suffix(SOURCE_SUFFIX).unwrap_or(&name);
        self.0.with_file_name(format!("{stem}{TEST_SUFFIX}"))
    }

    fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl From<PathBuf> for SourcePath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for SourcePath {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_path_from_source() {
        let p = SourcePath::from("pkg/calc/double.go");
        assert!(!p.is_test_path());
        assert_eq!(p.test_path(), PathBuf::from("pkg/calc/double_test.go"));
    }

    #[test]
    fn test_test_path_is_idempotent() {
        let once = SourcePath::from("pkg/calc/double.go").test_path();
        let twice = SourcePath::new(once.clone()).test_path();
        assert_eq!(once, twice);
        assert!(SourcePath::new(once).is_test_path());
    }

    #[test]
    fn test_test_path_without_go_suffix() {
        let p = SourcePath::from("notes.txt");
        assert_eq!(p.test_path(), PathBuf::from("notes.txt_test.go"));
    }
}
