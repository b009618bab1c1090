use serde::{Deserialize, Serialize};

use crate::classify::{TextClassifier, TypeClassifier};
use crate::expression::Expression;

/// A named or positional value slot: parameter, result or struct member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Field {
    /// Empty or `_` means unnamed.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "Type")]
    pub ty: Expression,
    /// Position among the sibling fields of the owning list.
    #[serde(default)]
    pub index: usize,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Expression, index: usize) -> Self {
        Self {
            name: name.into(),
            ty,
            index,
        }
    }

    pub fn unnamed(ty: Expression, index: usize) -> Self {
        Self::new("", ty, index)
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty() && self.name != "_"
    }

    pub fn is_writer(&self) -> bool {
        self.ty.is_writer
    }

    pub fn is_struct(&self) -> bool {
        TextClassifier.is_struct(&self.ty)
    }

    pub fn is_basic_type(&self) -> bool {
        TextClassifier.is_basic(&self.ty)
    }

    pub fn basic_value(&self) -> &'static str {
        TextClassifier.basic_value(&self.ty)
    }

    /// True when the type is neither basic nor already package-qualified.
    pub fn has_no_package(&self) -> bool {
        TextClassifier.has_no_package(&self.ty)
    }

    pub fn short_name(&self) -> String {
        self.ty.short_name()
    }
}

/// The bound value of a method, plus the members of its owning type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    #[serde(flatten)]
    pub field: Field,
    /// Sibling struct members, used to build the receiver field by field.
    #[serde(rename = "Fields", default)]
    pub fields: Vec<Field>,
}

impl Receiver {
    pub fn new(field: Field, fields: Vec<Field>) -> Self {
        Self { field, fields }
    }
}
