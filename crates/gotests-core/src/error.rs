//! Unified error types for gotests.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while loading templates or rendering tests.
#[derive(Error, Debug)]
pub enum GotestsError {
    // --- Template sources ---

    /// A template file or directory could not be read.
    #[error("failed to read template source {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template body is not valid Handlebars.
    #[error("failed to parse template '{name}' from {origin}")]
    TemplateParse {
        name: String,
        origin: String,
        #[source]
        source: handlebars::TemplateError,
    },

    /// A `{{#*inline}}` definition block is unterminated, unnamed or otherwise broken.
    #[error("malformed template definition in {origin}: {reason}")]
    MalformedDefinition { origin: String, reason: String },

    /// The requested set is not part of the built-in catalogue.
    #[error("unknown template set: {name} (available: {available})")]
    UnknownTemplateSet { name: String, available: String },

    /// A load source produced no templates at all.
    #[error("template source {0} contains no templates")]
    EmptyTemplateSet(String),

    /// One or more slots required by the caller are not registered.
    #[error("missing template slots: {}", .0.join(", "))]
    MissingSlots(Vec<&'static str>),

    // --- Rendering ---

    /// A template failed while executing against a model (unknown template,
    /// helper argument mismatch, missing variable, explicit error).
    #[error("template '{template}' failed to execute")]
    TemplateExecution {
        template: String,
        #[source]
        source: handlebars::RenderError,
    },

    // --- Output ---

    /// The caller's sink rejected a write. Bytes already written stay written.
    #[error("failed to write generated output")]
    Write(#[source] std::io::Error),

    // --- Configuration ---

    /// The configuration file (`gotests.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be written.
    #[error("failed to write config at {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of [`GotestsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading or parsing a template source failed; the load call is fatal.
    TemplateSource,
    /// Executing a template failed; the registry stays usable.
    TemplateExecution,
    /// The output sink failed.
    Write,
    /// Loading or saving configuration failed.
    Config,
}

impl GotestsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TemplateRead { .. }
            | Self::TemplateParse { .. }
            | Self::MalformedDefinition { .. }
            | Self::UnknownTemplateSet { .. }
            | Self::EmptyTemplateSet(_)
            | Self::MissingSlots(_) => ErrorKind::TemplateSource,
            Self::TemplateExecution { .. } => ErrorKind::TemplateExecution,
            Self::Write(_) => ErrorKind::Write,
            Self::ConfigNotFound { .. } | Self::ConfigWrite { .. } | Self::ConfigParse { .. } => {
                ErrorKind::Config
            }
        }
    }
}

/// Alias for `Result<T, GotestsError>`.
pub type Result<T> = std::result::Result<T, GotestsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_variants() {
        let read = GotestsError::TemplateRead {
            path: PathBuf::from("templates"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(read.kind(), ErrorKind::TemplateSource);
        assert_eq!(
            GotestsError::MissingSlots(vec!["header"]).kind(),
            ErrorKind::TemplateSource
        );
        let write = GotestsError::Write(std::io::Error::new(std::io::ErrorKind::Other, "full"));
        assert_eq!(write.kind(), ErrorKind::Write);
    }

    #[test]
    fn test_missing_slots_message_lists_names() {
        let err = GotestsError::MissingSlots(vec!["header", "call"]);
        assert_eq!(err.to_string(), "missing template slots: header, call");
    }
}
