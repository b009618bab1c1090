//! Compile-time embedded template sets.
//!
//! Each entry loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/gotests-core/src/templates/embedded.rs`).
//!
//! ## Adding a template to a set
//!
//! 1. Place the `.hbs` file under `templates/<set>/`
//! 2. Add a [`TemplateFile`] entry to the set's constant below
//! 3. Keep each alternate set at or below [`MAX_SET_ENTRIES`] files; extra entries
//!    are not enumerated by a named-set load
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT rename a `{{#*inline}}` definition without checking every `{{> partial}}`
//! that refers to it.

/// One embedded template file.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub name: &'static str,
    pub text: &'static str,
}

/// Maximum number of entries enumerated per named-set load.
pub const MAX_SET_ENTRIES: usize = 7;

// -------------------------------------------------------
// Default set (plain `testing` comparisons)
// -------------------------------------------------------

pub const DEFAULT: &[TemplateFile] = &[
    TemplateFile {
        name: "call.hbs",
        text: include_str!("../../../../templates/default/call.hbs"),
    },
    TemplateFile {
        name: "function.hbs",
        text: include_str!("../../../../templates/default/function.hbs"),
    },
    TemplateFile {
        name: "header.hbs",
        text: include_str!("../../../../templates/default/header.hbs"),
    },
    TemplateFile {
        name: "inputs.hbs",
        text: include_str!("../../../../templates/default/inputs.hbs"),
    },
    TemplateFile {
        name: "message.hbs",
        text: include_str!("../../../../templates/default/message.hbs"),
    },
    TemplateFile {
        name: "results.hbs",
        text: include_str!("../../../../templates/default/results.hbs"),
    },
    TemplateFile {
        name: "types.hbs",
        text: include_str!("../../../../templates/default/types.hbs"),
    },
];

// -------------------------------------------------------
// Alternate catalogue
// -------------------------------------------------------

pub const TESTIFY: &[TemplateFile] = &[
    TemplateFile {
        name: "call.hbs",
        text: include_str!("../../../../templates/testify/call.hbs"),
    },
    TemplateFile {
        name: "function.hbs",
        text: include_str!("../../../../templates/testify/function.hbs"),
    },
    TemplateFile {
        name: "header.hbs",
        text: include_str!("../../../../templates/testify/header.hbs"),
    },
    TemplateFile {
        name: "inputs.hbs",
        text: include_str!("../../../../templates/testify/inputs.hbs"),
    },
    TemplateFile {
        name: "message.hbs",
        text: include_str!("../../../../templates/testify/message.hbs"),
    },
    TemplateFile {
        name: "results.hbs",
        text: include_str!("../../../../templates/testify/results.hbs"),
    },
    TemplateFile {
        name: "types.hbs",
        text: include_str!("../../../../templates/testify/types.hbs"),
    },
];

/// Named alternate sets, selectable with [`crate::config::TemplateSource::Named`].
pub const CATALOGUE: &[(&str, &[TemplateFile])] = &[("testify", TESTIFY)];

/// Look up an alternate set by name.
pub fn named_set(name: &str) -> Option<&'static [TemplateFile]> {
    CATALOGUE
        .iter()
        .find(|(set, _)| *set == name)
        .map(|(_, files)| *files)
}

/// Comma-separated names of the alternate sets.
pub fn available_sets() -> String {
    CATALOGUE
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_set_lookup() {
        assert!(named_set("testify").is_some());
        assert!(named_set("default").is_none());
        assert!(named_set("").is_none());
    }

    #[test]
    fn test_sets_fit_entry_bound() {
        assert!(DEFAULT.len() <= MAX_SET_ENTRIES);
        for (_, files) in CATALOGUE {
            assert!(files.len() <= MAX_SET_ENTRIES);
        }
    }

    #[test]
    fn test_available_sets() {
        assert_eq!(available_sets(), "testify");
    }
}
