//! Identifier generation for generated test code.
//!
//! Every function here is pure over a single model value and is exposed to
//! templates through the helpers in [`crate::templates::helpers`].

use crate::field::{Field, Receiver};

/// Upcase the first character; the rest is left untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Declared name, or the literal type text for unnamed fields.
pub fn field_name(f: &Field) -> String {
    if f.is_named() {
        f.name.clone()
    } else {
        f.ty.to_string()
    }
}

/// Receiver variable name, remapped away from identifiers the generated test uses.
pub fn receiver_name(r: &Receiver) -> String {
    let name = if r.field.is_named() {
        r.field.name.clone()
    } else {
        r.field.short_name()
    };
    match name.as_str() {
        // the test case struct has a `name` field
        "name" => "n".to_string(),
        // `t` is the *testing.T parameter
        "t" => "tr".to_string(),
        _ => name,
    }
}

pub fn param_name(f: &Field) -> String {
    if f.is_named() {
        f.name.clone()
    } else {
        format!("in{}", f.index)
    }
}

pub fn want_name(f: &Field) -> String {
    prefixed("expected", f)
}

pub fn got_name(f: &Field) -> String {
    prefixed("actual", f)
}

fn prefixed(prefix: &str, f: &Field) -> String {
    if f.is_named() {
        format!("{prefix}{}", capitalize(&f.name))
    } else if f.index == 0 {
        prefix.to_string()
    } else {
        format!("{prefix}{}", f.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;

    fn int_field(name: &str, index: usize) -> Field {
        Field::new(name, Expression::new("int"), index)
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("count"), "Count");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ärger"), "Ärger");
    }

    #[test]
    fn test_field_name_falls_back_to_type() {
        assert_eq!(field_name(&int_field("size", 0)), "size");
        let embedded = Field::unnamed(Expression::new("sync.Mutex").star(), 1);
        assert_eq!(field_name(&embedded), "*sync.Mutex");
    }

    #[test]
    fn test_param_name() {
        assert_eq!(param_name(&int_field("", 2)), "in2");
        assert_eq!(param_name(&int_field("_", 0)), "in0");
        assert_eq!(param_name(&int_field("limit", 3)), "limit");
    }

    #[test]
    fn test_want_and_got_names() {
        assert_eq!(want_name(&int_field("Count", 0)), "expectedCount");
        assert_eq!(got_name(&int_field("Count", 0)), "actualCount");
        assert_eq!(want_name(&int_field("count", 1)), "expectedCount");
        assert_eq!(want_name(&int_field("", 0)), "expected");
        assert_eq!(got_name(&int_field("", 0)), "actual");
        assert_eq!(want_name(&int_field("", 2)), "expected2");
        assert_eq!(got_name(&int_field("", 2)), "actual2");
    }

    #[test]
    fn test_receiver_name_remaps_collisions() {
        let named =
            |name: &str| Receiver::new(Field::new(name, Expression::new("Repo"), 0), vec![]);
        assert_eq!(receiver_name(&named("name")), "n");
        assert_eq!(receiver_name(&named("t")), "tr");
        assert_eq!(receiver_name(&named("r")), "r");
    }

    #[test]
    fn test_receiver_name_uses_short_name() {
        let unnamed = Receiver::new(Field::unnamed(Expression::new("Tree").star(), 0), vec![]);
        assert_eq!(receiver_name(&unnamed), "tr");
        let unnamed = Receiver::new(Field::unnamed(Expression::new("Cache"), 0), vec![]);
        assert_eq!(receiver_name(&unnamed), "c");
    }
}
