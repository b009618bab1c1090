//! Helpers exposed to templates.
//!
//! | Helper       | Argument   | Result                                   |
//! |--------------|------------|------------------------------------------|
//! | `Capitalize` | string     | first character upcased                  |
//! | `AddPackage` | type       | whether the package alias must be added  |
//! | `Field`      | field      | name, or type text when unnamed          |
//! | `Receiver`   | receiver   | receiver variable name                   |
//! | `Param`      | field      | name, or `in<Index>`                     |
//! | `Want`       | field      | `expected...` variable name              |
//! | `Got`        | field      | `actual...` variable name                |
//!
//! Arguments are model values from the render context. An argument that does not
//! deserialize into the expected model type fails the render.

use std::sync::Arc;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, RenderErrorReason,
    ScopedJson,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::classify::TypeClassifier;
use crate::expression::Expression;
use crate::field::{Field, Receiver};
use crate::naming;

/// Register every helper on `hbs`.
pub fn register(hbs: &mut Handlebars<'static>, classifier: Arc<dyn TypeClassifier>) {
    hbs.register_helper("Capitalize", Box::new(CapitalizeHelper));
    hbs.register_helper("AddPackage", Box::new(AddPackageHelper { classifier }));
    hbs.register_helper("Field", Box::new(naming_helper::<Field>("Field", naming::field_name)));
    hbs.register_helper(
        "Receiver",
        Box::new(naming_helper::<Receiver>("Receiver", naming::receiver_name)),
    );
    hbs.register_helper("Param", Box::new(naming_helper::<Field>("Param", naming::param_name)));
    hbs.register_helper("Want", Box::new(naming_helper::<Field>("Want", naming::want_name)));
    hbs.register_helper("Got", Box::new(naming_helper::<Field>("Got", naming::got_name)));
}

/// Deserialize the first positional argument of `h` into a model value.
fn argument<T: DeserializeOwned>(helper: &'static str, h: &Helper<'_>) -> Result<T, RenderError> {
    let param = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(helper, 0))?;
    serde_json::from_value(param.value().clone()).map_err(|e| {
        RenderErrorReason::Other(format!("{helper}: unexpected argument {}: {e}", param.value()))
            .into()
    })
}

struct CapitalizeHelper;

impl HelperDef for CapitalizeHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let s: String = argument("Capitalize", h)?;
        Ok(ScopedJson::Derived(Value::String(naming::capitalize(&s))))
    }
}

struct AddPackageHelper {
    classifier: Arc<dyn TypeClassifier>,
}

impl HelperDef for AddPackageHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let ty: Expression = argument("AddPackage", h)?;
        Ok(ScopedJson::Derived(Value::Bool(
            self.classifier.needs_package(&ty),
        )))
    }
}

/// Adapts a pure naming function over one model value into a helper.
struct NamingHelper<T> {
    name: &'static str,
    name_of: fn(&T) -> String,
}

fn naming_helper<T>(name: &'static str, name_of: fn(&T) -> String) -> NamingHelper<T> {
    NamingHelper { name, name_of }
}

impl<T: DeserializeOwned> HelperDef for NamingHelper<T> {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let value: T = argument(self.name, h)?;
        Ok(ScopedJson::Derived(Value::String((self.name_of)(&value))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::TextClassifier;
    use serde_json::json;

    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        register(&mut hbs, Arc::new(TextClassifier));
        hbs
    }

    fn render(template: &str, data: &Value) -> String {
        engine().render_template(template, data).unwrap()
    }

    #[test]
    fn test_capitalize_helper() {
        assert_eq!(render("{{Capitalize s}}", &json!({"s": "double"})), "Double");
    }

    #[test]
    fn test_naming_helpers() {
        let data = json!({
            "named": {"Name": "count", "Type": {"Value": "int"}, "Index": 1},
            "unnamed": {"Name": "", "Type": {"Value": "*sync.Mutex"}, "Index": 2},
        });
        assert_eq!(render("{{Param named}}/{{Param unnamed}}", &data), "count/in2");
        assert_eq!(render("{{Want named}}/{{Got unnamed}}", &data), "expectedCount/actual2");
        assert_eq!(render("{{Field unnamed}}", &data), "*sync.Mutex");
    }

    #[test]
    fn test_receiver_helper_remaps() {
        let data = json!({"r": {"Name": "t", "Type": {"Value": "Tree"}, "Index": 0, "Fields": []}});
        assert_eq!(render("{{Receiver r}}", &data), "tr");
    }

    #[test]
    fn test_add_package_helper_yields_bool() {
        let data = json!({
            "local": {"Value": "Point"},
            "remote": {"Value": "time.Time"},
        });
        let out = render(
            concat!(
                "{{#if (AddPackage local)}}yes{{else}}no{{/if}} ",
                "{{#if (AddPackage remote)}}yes{{else}}no{{/if}}",
            ),
            &data,
        );
        assert_eq!(out, "yes no");
    }

    #[test]
    fn test_wrong_argument_shape_fails() {
        let data = json!({"s": "not a field"});
        assert!(engine().render_template("{{Param s}}", &data).is_err());
        assert!(engine().render_template("{{Want}}", &data).is_err());
    }
}
