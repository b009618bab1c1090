//! Type classification used to pick literal shapes in generated tests.
//!
//! Decisions are made on the literal type text, not on a resolved type system.
//! The heuristic has known blind spots: a named type whose underlying text starts
//! with `map[string]` counts as basic, and generic parameters or deep aliases are
//! judged purely by their spelling. Everything that depends on these decisions goes
//! through [`TypeClassifier`], so a type-checked implementation can replace
//! [`TextClassifier`] without touching rendering.

use crate::expression::Expression;

/// Zero literal used for string values in generated cases.
pub const STRING_PLACEHOLDER: &str = "\"stringValue\"";

const BASIC_TYPES: &[&str] = &[
    "bool",
    "string",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "byte",
    "rune",
    "float32",
    "float64",
    "complex64",
    "complex128",
];

const STRING_MAP_PREFIX: &str = "map[string]";
const STRUCT_PREFIX: &str = "struct";

/// Classification decisions the render engine relies on.
pub trait TypeClassifier: Send + Sync {
    /// Whether a value of this type can be written as a fixed literal.
    fn is_basic(&self, ty: &Expression) -> bool;

    /// Canonical zero literal for the type (`nil` when there is none).
    fn basic_value(&self, ty: &Expression) -> &'static str;

    /// Whether the type is built field-by-field as a struct literal.
    fn is_struct(&self, ty: &Expression) -> bool;

    /// Whether the type name must be prefixed with the source package alias
    /// when the test lives in an external package.
    fn needs_package(&self, ty: &Expression) -> bool;

    /// Whether the full spelling is neither basic nor package-qualified.
    ///
    /// Unlike [`TypeClassifier::needs_package`] this looks at pointer and slice
    /// decoration, so `*int` and `[]string` count as having no package.
    fn has_no_package(&self, ty: &Expression) -> bool;
}

/// Literal-text heuristic over the type spelling and its underlying text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextClassifier;

impl TypeClassifier for TextClassifier {
    fn is_basic(&self, ty: &Expression) -> bool {
        is_basic_type(&ty.to_string()) || is_basic_type(&ty.underlying)
    }

    fn basic_value(&self, ty: &Expression) -> &'static str {
        let text = ty.to_string();
        if is_basic_type(&text) {
            return zero_literal(&text);
        }
        if is_basic_type(&ty.underlying) {
            return zero_literal(&ty.underlying);
        }
        "nil"
    }

    fn is_struct(&self, ty: &Expression) -> bool {
        ty.underlying.starts_with(STRUCT_PREFIX)
    }

    fn needs_package(&self, ty: &Expression) -> bool {
        !is_basic_type(&ty.value) && !ty.value.contains('.')
    }

    fn has_no_package(&self, ty: &Expression) -> bool {
        !is_basic_type(&ty.to_string()) && !ty.value.contains('.')
    }
}

/// Whether `text` names a basic type or a string-keyed map.
pub fn is_basic_type(text: &str) -> bool {
    BASIC_TYPES.contains(&text) || text.starts_with(STRING_MAP_PREFIX)
}

fn zero_literal(text: &str) -> &'static str {
    match text {
        "bool" => "false",
        "string" => STRING_PLACEHOLDER,
        t if t.starts_with(STRING_MAP_PREFIX) => "nil",
        _ => "0",
    }
}
