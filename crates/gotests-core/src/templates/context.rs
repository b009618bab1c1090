//! Serialisable snapshots of the model handed to templates.
//!
//! Templates cannot call methods, so every derived attribute (test views, arity,
//! names, classification) is computed up front. Keys are PascalCase; views keep
//! the raw model keys (`Name`, `Type`, `Index`, `Fields`) so helpers can read them
//! back as model values.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::classify::TypeClassifier;
use crate::config::RenderOptions;
use crate::expression::Expression;
use crate::field::{Field, Receiver};
use crate::function::Function;
use crate::header::{Header, Import};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpressionView {
    pub value: String,
    pub is_star: bool,
    pub is_variadic: bool,
    pub is_writer: bool,
    pub underlying: String,
    /// Full spelling, pointer and slice decoration included.
    pub string: String,
}

impl ExpressionView {
    pub fn new(ty: &Expression) -> Self {
        Self {
            value: ty.value.clone(),
            is_star: ty.is_star,
            is_variadic: ty.is_variadic,
            is_writer: ty.is_writer,
            underlying: ty.underlying.clone(),
            string: ty.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldView {
    pub name: String,
    #[serde(rename = "Type")]
    pub ty: ExpressionView,
    pub index: usize,
    pub is_named: bool,
    pub is_writer: bool,
    pub is_struct: bool,
    pub is_basic_type: bool,
    pub basic_value: &'static str,
    pub has_no_package: bool,
}

impl FieldView {
    pub fn new(f: &Field, classifier: &dyn TypeClassifier) -> Self {
        Self {
            name: f.name.clone(),
            ty: ExpressionView::new(&f.ty),
            index: f.index,
            is_named: f.is_named(),
            is_writer: f.is_writer(),
            is_struct: classifier.is_struct(&f.ty),
            is_basic_type: classifier.is_basic(&f.ty),
            basic_value: classifier.basic_value(&f.ty),
            has_no_package: classifier.has_no_package(&f.ty),
        }
    }

    fn list<'a>(
        fields: impl IntoIterator<Item = &'a Field>,
        classifier: &dyn TypeClassifier,
    ) -> Vec<Self> {
        fields
            .into_iter()
            .map(|f| Self::new(f, classifier))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiverView {
    #[serde(flatten)]
    pub field: FieldView,
    #[serde(rename = "Fields")]
    pub fields: Vec<FieldView>,
    #[serde(rename = "ShortName")]
    pub short_name: String,
}

impl ReceiverView {
    pub fn new(r: &Receiver, classifier: &dyn TypeClassifier) -> Self {
        Self {
            field: FieldView::new(&r.field, classifier),
            fields: FieldView::list(&r.fields, classifier),
            short_name: r.field.short_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionView {
    pub name: String,
    pub is_exported: bool,
    pub is_constructor: bool,
    pub receiver: Option<ReceiverView>,
    pub parameters: Vec<FieldView>,
    pub results: Vec<FieldView>,
    pub returns_error: bool,
    pub test_parameters: Vec<FieldView>,
    pub test_results: Vec<FieldView>,
    pub arity: &'static str,
    pub returns_multiple: bool,
    pub only_returns_one_value: bool,
    pub only_returns_error: bool,
    pub full_name: String,
    pub test_name: String,
    pub is_naked: bool,
}

impl FunctionView {
    pub fn new(f: &Function, classifier: &dyn TypeClassifier) -> Self {
        Self {
            name: f.name.clone(),
            is_exported: f.is_exported,
            is_constructor: f.is_constructor,
            receiver: f.receiver.as_ref().map(|r| ReceiverView::new(r, classifier)),
            parameters: FieldView::list(&f.parameters, classifier),
            results: FieldView::list(&f.results, classifier),
            returns_error: f.returns_error,
            test_parameters: FieldView::list(f.test_parameters(), classifier),
            test_results: FieldView::list(&f.test_results(), classifier),
            arity: f.arity().as_str(),
            returns_multiple: f.returns_multiple(),
            only_returns_one_value: f.only_returns_one_value(),
            only_returns_error: f.only_returns_error(),
            full_name: f.full_name(),
            test_name: f.test_name(),
            is_naked: f.is_naked(),
        }
    }
}

/// Header data for templates. `Code` is not exposed: it is appended verbatim
/// after the `header` template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeaderView {
    pub comments: Vec<String>,
    pub package: String,
    pub test_package: String,
    pub imports: Vec<Import>,
    /// The test file lives in a different package than the source.
    pub is_external: bool,
}

impl HeaderView {
    pub fn new(h: &Header) -> Self {
        Self {
            comments: h.comments.clone(),
            package: h.package.clone(),
            test_package: h.test_package.clone(),
            imports: h.imports.clone(),
            is_external: h.is_external(),
        }
    }
}

/// Everything the `function` template sees: the function's own view at the top
/// level, plus header, optional constructor, render flags and extension parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionContext<'a> {
    #[serde(flatten)]
    pub function: FunctionView,
    pub header: HeaderView,
    pub constructor: Option<FunctionView>,
    pub print_inputs: bool,
    pub subtests: bool,
    pub parallel: bool,
    pub template_params: &'a Map<String, Value>,
}

impl<'a> FunctionContext<'a> {
    pub fn new(
        function: &Function,
        header: &Header,
        constructor: Option<&Function>,
        options: &'a RenderOptions,
        classifier: &dyn TypeClassifier,
    ) -> Self {
        Self {
            function: FunctionView::new(function, classifier),
            header: HeaderView::new(header),
            constructor: constructor.map(|c| FunctionView::new(c, classifier)),
            print_inputs: options.print_inputs,
            subtests: options.subtests,
            parallel: options.parallel,
            template_params: &options.template_params,
        }
    }
}
