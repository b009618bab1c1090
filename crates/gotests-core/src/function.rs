use serde::{Deserialize, Serialize};

use crate::expression::Expression;
use crate::field::{Field, Receiver};
use crate::naming::capitalize;

/// Result-shape classification of a function, from `(len(results), returns_error)`.
///
/// Exactly one variant applies to every function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// More than one non-error result.
    Multiple,
    /// Exactly one result and no error.
    OneValue,
    /// No results besides the error.
    OnlyError,
    /// No results and no error, or one result plus an error.
    Neither,
}

impl Arity {
    pub fn of(results: usize, returns_error: bool) -> Self {
        match (results, returns_error) {
            (n, _) if n > 1 => Self::Multiple,
            (1, false) => Self::OneValue,
            (0, true) => Self::OnlyError,
            _ => Self::Neither,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Multiple => "multiple",
            Self::OneValue => "one_value",
            Self::OnlyError => "only_error",
            Self::Neither => "neither",
        }
    }
}

/// A function or method declaration as produced by source analysis.
///
/// `results` never contains the trailing `error`; that is carried by `returns_error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub is_exported: bool,
    #[serde(default)]
    pub is_constructor: bool,
    #[serde(default)]
    pub receiver: Option<Receiver>,
    #[serde(default)]
    pub parameters: Vec<Field>,
    #[serde(default)]
    pub results: Vec<Field>,
    #[serde(default)]
    pub returns_error: bool,
}

impl Function {
    /// Parameters the test supplies as inputs (writer-marked ones excluded).
    pub fn test_parameters(&self) -> Vec<&Field> {
        self.parameters.iter().filter(|p| !p.is_writer()).collect()
    }

    /// Results the test checks: declared results, then one string per writer parameter.
    pub fn test_results(&self) -> Vec<Field> {
        let mut results = self.results.clone();
        for p in self.parameters.iter().filter(|p| p.is_writer()) {
            let index = results.len();
            results.push(Field::new(
                p.name.clone(),
                Expression::new("string").writer().with_underlying("string"),
                index,
            ));
        }
        results
    }

    pub fn arity(&self) -> Arity {
        Arity::of(self.results.len(), self.returns_error)
    }

    pub fn returns_multiple(&self) -> bool {
        self.arity() == Arity::Multiple
    }

    pub fn only_returns_one_value(&self) -> bool {
        self.arity() == Arity::OneValue
    }

    pub fn only_returns_error(&self) -> bool {
        self.arity() == Arity::OnlyError
    }

    /// Receiver type name and function name, both capitalized.
    pub fn full_name(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| capitalize(&r.field.ty.value))
            .unwrap_or_default();
        receiver + &capitalize(&self.name)
    }

    /// Name of the generated test function, always visible to `go test`.
    pub fn test_name(&self) -> String {
        if self.name.starts_with("Test") {
            return self.name.clone();
        }
        if let Some(receiver) = &self.receiver {
            let ty = &receiver.field.ty.value;
            let sep = if starts_lowercase(ty) { "_" } else { "" };
            return format!("Test{sep}{ty}_{}", self.name);
        }
        if starts_lowercase(&self.name) {
            return format!("Test_{}", self.name);
        }
        format!("Test{}", self.name)
    }

    /// No receiver, parameters or results: the test needs no setup or comparison.
    pub fn is_naked(&self) -> bool {
        self.receiver.is_none() && self.parameters.is_empty() && self.results.is_empty()
    }
}

fn starts_lowercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str) -> Function {
        Function {
            name: name.into(),
            is_exported: name.starts_with(|c: char| c.is_uppercase()),
            ..Function::default()
        }
    }

    fn method(name: &str, receiver_type: &str) -> Function {
        Function {
            receiver: Some(Receiver::new(
                Field::new("r", Expression::new(receiver_type).star(), 0),
                vec![],
            )),
            ..func(name)
        }
    }

    fn with_writer() -> Function {
        Function {
            parameters: vec![
                Field::new("w", Expression::new("io.Writer").writer(), 0),
                Field::new("msg", Expression::new("string"), 1),
                Field::new("out", Expression::new("io.Writer").writer(), 2),
            ],
            results: vec![Field::unnamed(Expression::new("int"), 0)],
            returns_error: true,
            ..func("Emit")
        }
    }

    #[test]
    fn test_parameters_skip_writers() {
        let f = with_writer();
        let params = f.test_parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "msg");
        assert_eq!(params[0].index, 1);
    }

    #[test]
    fn test_results_append_writers_contiguously() {
        let f = with_writer();
        let results = f.test_results();
        assert_eq!(results.len(), f.results.len() + 2);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.index, i);
        }
        assert_eq!(results[1].name, "w");
        assert!(results[1].is_writer());
        assert_eq!(results[1].ty.to_string(), "string");
        assert_eq!(results[2].name, "out");
    }

    #[test]
    fn test_views_are_stable() {
        let f = with_writer();
        assert_eq!(f.test_results(), f.test_results());
        assert_eq!(f.test_parameters(), f.test_parameters());
    }

    #[test]
    fn test_arity_is_exclusive_and_total() {
        for results in 0..4 {
            for returns_error in [false, true] {
                let f = Function {
                    results: (0..results)
                        .map(|i| Field::unnamed(Expression::new("int"), i))
                        .collect(),
                    returns_error,
                    ..func("F")
                };
                let flags = [
                    f.returns_multiple(),
                    f.only_returns_one_value(),
                    f.only_returns_error(),
                ];
                let set = flags.iter().filter(|b| **b).count();
                assert!(set <= 1, "{results} results, error={returns_error}");
                assert_eq!(set == 0, f.arity() == Arity::Neither);
            }
        }
    }

    #[test]
    fn test_arity_cases() {
        assert_eq!(Arity::of(2, true), Arity::Multiple);
        assert_eq!(Arity::of(1, false), Arity::OneValue);
        assert_eq!(Arity::of(1, true), Arity::Neither);
        assert_eq!(Arity::of(0, true), Arity::OnlyError);
        assert_eq!(Arity::of(0, false), Arity::Neither);
    }

    #[test]
    fn test_test_name() {
        assert_eq!(func("Double").test_name(), "TestDouble");
        assert_eq!(func("double").test_name(), "Test_double");
        assert_eq!(method("Save", "repo").test_name(), "Test_repo_Save");
        assert_eq!(method("Save", "Repo").test_name(), "TestRepo_Save");
        assert_eq!(method("save", "Repo").test_name(), "TestRepo_save");
    }

    #[test]
    fn test_test_name_is_idempotent() {
        let once = func("double").test_name();
        assert_eq!(func(&once).test_name(), once);
        assert_eq!(func("TestHelper").test_name(), "TestHelper");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(func("double").full_name(), "Double");
        assert_eq!(method("save", "repo").full_name(), "RepoSave");
    }

    #[test]
    fn test_is_naked() {
        assert!(func("Init").is_naked());
        assert!(!method("Init", "Server").is_naked());
        assert!(!with_writer().is_naked());
    }
}
