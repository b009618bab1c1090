//! Generator configuration: which templates to load and how to render.
//!
//! Stored as pretty JSON, by default in `gotests.config.json`:
//!
//! ```json
//! {
//!   "templates": { "kind": "named", "name": "testify" },
//!   "render": { "print_inputs": true, "subtests": true, "parallel": false, "template_params": {} }
//! }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GotestsError, Result};
use crate::templates::renderer::TemplateRenderer;

/// Default config file name.
pub const CONFIG_FILE: &str = "gotests.config.json";

/// Where the template registry is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateSource {
    /// The bundle compiled into the library.
    #[default]
    Defaults,
    /// Raw template texts, each declaring `{{#*inline}}` definitions.
    Texts { texts: Vec<String> },
    /// Every file in a directory.
    Directory { path: PathBuf },
    /// A set from the built-in alternate catalogue.
    Named { name: String },
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => f.write_str("embedded defaults"),
            Self::Texts { texts } => write!(f, "{} raw texts", texts.len()),
            Self::Directory { path } => write!(f, "directory {}", path.display()),
            Self::Named { name } => write!(f, "template set '{name}'"),
        }
    }
}

/// Flags and extension parameters for rendering one test function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit a populated case with literal input values instead of a placeholder.
    pub print_inputs: bool,
    /// Wrap each case in its own named `t.Run` sub-test.
    pub subtests: bool,
    /// Mark sub-tests as parallel.
    pub parallel: bool,
    /// Free-form values available to templates as `TemplateParams`.
    pub template_params: Map<String, Value>,
}

/// Full generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub templates: TemplateSource,
    pub render: RenderOptions,
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| GotestsError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| GotestsError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| GotestsError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| GotestsError::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Build a renderer from the configured template source.
    pub fn renderer(&self) -> Result<TemplateRenderer> {
        TemplateRenderer::load(&self.templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut params = Map::new();
        params.insert("suite".into(), Value::String("integration".into()));
        let config = GeneratorConfig {
            templates: TemplateSource::Named {
                name: "testify".into(),
            },
            render: RenderOptions {
                print_inputs: true,
                subtests: true,
                parallel: false,
                template_params: params,
            },
        };
        config.save(&path).unwrap();
        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_defaults_when_fields_missing() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.templates, TemplateSource::Defaults);
        assert!(!config.render.subtests);
        assert!(config.render.template_params.is_empty());
    }

    #[test]
    fn test_template_source_tagging() {
        let source: TemplateSource =
            serde_json::from_str(r#"{"kind": "directory", "path": "tmpl"}"#).unwrap();
        assert_eq!(
            source,
            TemplateSource::Directory {
                path: PathBuf::from("tmpl")
            }
        );
    }

    #[test]
    fn test_load_nonexistent() {
        let err = GeneratorConfig::load(Path::new("/tmp/nonexistent_gotests_config.json"))
            .unwrap_err();
        assert!(matches!(err, GotestsError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(matches!(err, GotestsError::ConfigParse { .. }));
    }

    #[test]
    fn test_renderer_from_config() {
        let renderer = GeneratorConfig::default().renderer().unwrap();
        assert!(renderer.has_template("function"));
    }
}
