use std::fmt;

use serde::{Deserialize, Serialize};

/// One type reference as written in a declaration.
///
/// `value` is the undecorated base name; pointer and variadic wrapping are kept
/// as flags so the full spelling can be rebuilt with [`fmt::Display`].
/// `underlying` is the resolved representation (e.g. `struct{...}` or `float64`
/// for a named wrapper) and never carries pointer or slice decoration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expression {
    pub value: String,
    #[serde(default)]
    pub is_star: bool,
    #[serde(default)]
    pub is_variadic: bool,
    /// Marks an output-capture parameter (an `io.Writer` the test inspects).
    #[serde(default)]
    pub is_writer: bool,
    #[serde(default)]
    pub underlying: String,
}

impl Expression {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_underlying(mut self, underlying: impl Into<String>) -> Self {
        self.underlying = underlying.into();
        self
    }

    pub fn star(mut self) -> Self {
        self.is_star = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    pub fn writer(mut self) -> Self {
        self.is_writer = true;
        self
    }

    /// One-letter lowercase identifier derived from the base type name.
    ///
    /// Empty when the base name is empty.
    pub fn short_name(&self) -> String {
        self.value
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_variadic {
            f.write_str("[]")?;
        }
        if self.is_star {
            f.write_str("*")?;
        }
        f.write_str(&self.value)
    }
}
