use serde::{Deserialize, Serialize};

/// One entry of the import block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Import {
    /// Alias, empty when the package is imported under its own name.
    #[serde(default)]
    pub name: String,
    /// Quoted import path as written in source, e.g. `"net/http"`.
    pub path: String,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            path: path.into(),
        }
    }

    pub fn aliased(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// File-level preamble of a generated test file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    #[serde(default)]
    pub comments: Vec<String>,
    pub package: String,
    /// Package clause of the test file; empty means the source package.
    #[serde(default)]
    pub test_package: String,
    #[serde(default)]
    pub imports: Vec<Import>,
    /// Trailing source emitted verbatim after the rendered preamble.
    #[serde(default)]
    pub code: Vec<u8>,
}

impl Header {
    /// Whether the tests live in a separate `_test` package and must qualify
    /// identifiers of the source package.
    pub fn is_external(&self) -> bool {
        !self.test_package.is_empty() && self.test_package != self.package
    }
}
