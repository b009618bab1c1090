//! Handlebars-based renderer for generated test files.
//!
//! Wraps a [`handlebars::Handlebars`] registry with **strict mode** enabled and HTML
//! escaping disabled. Strict mode makes any `{{variable}}` missing from the context
//! an error instead of an empty string; templates produce Go source, and a silently
//! missing value would surface much later as a confusing compile failure.
//!
//! The registry is an owned value: it is built from a [`TemplateSource`], and
//! [`TemplateRenderer::reload`] replaces its contents wholesale. Nothing from a
//! previous load survives a reload, so a partial custom set must declare every
//! template it uses.
//!
//! ## Usage
//!
//! ```ignore
//! use gotests_core::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::with_defaults()?;
//! let mut out = Vec::new();
//! renderer.render_header(&mut out, &header)?;
//! renderer.render_function(&mut out, &function, &header, None, &RenderOptions::default())?;
//! ```

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use handlebars::Handlebars;
use serde::Serialize;

use crate::classify::{TextClassifier, TypeClassifier};
use crate::config::{RenderOptions, TemplateSource};
use crate::error::{GotestsError, Result};
use crate::function::Function;
use crate::header::Header;
use crate::templates::context::{FunctionContext, HeaderView};
use crate::templates::slot::Slot;
use crate::templates::{helpers, loader};

/// Template registry plus the two render entry points.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
    classifier: Arc<dyn TypeClassifier>,
}

impl TemplateRenderer {
    /// Build a renderer from `source` using the literal-text type heuristic.
    pub fn load(source: &TemplateSource) -> Result<Self> {
        Self::load_with(source, Arc::new(TextClassifier))
    }

    /// Build a renderer from `source` with a custom type classifier.
    pub fn load_with(source: &TemplateSource, classifier: Arc<dyn TypeClassifier>) -> Result<Self> {
        let mut renderer = Self {
            hbs: engine(&classifier),
            classifier,
        };
        loader::load(&mut renderer.hbs, source)?;
        Ok(renderer)
    }

    /// The bundle compiled into the library.
    pub fn with_defaults() -> Result<Self> {
        Self::load(&TemplateSource::Defaults)
    }

    /// Raw template texts, each declaring one or more `{{#*inline}}` definitions.
    pub fn from_texts<I, S>(texts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::load(&TemplateSource::Texts {
            texts: texts.into_iter().map(Into::into).collect(),
        })
    }

    /// Every file in `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::load(&TemplateSource::Directory { path: dir.into() })
    }

    /// A set from the built-in alternate catalogue.
    pub fn from_named_set(name: &str) -> Result<Self> {
        Self::load(&TemplateSource::Named {
            name: name.to_string(),
        })
    }

    /// Discard every registered template and load `source` instead.
    ///
    /// On failure the renderer is left empty; it must be reloaded before use.
    pub fn reload(&mut self, source: &TemplateSource) -> Result<()> {
        self.hbs = engine(&self.classifier);
        if let Err(e) = loader::load(&mut self.hbs, source) {
            self.hbs = engine(&self.classifier);
            return Err(e);
        }
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.hbs.has_template(name)
    }

    /// Names of all registered templates, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hbs.get_templates().keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Slots of the bundled sets that are not registered.
    pub fn missing_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| !self.has_template(slot.name()))
            .collect()
    }

    /// Fail early when any of `slots` is not registered.
    pub fn require_slots(&self, slots: &[Slot]) -> Result<()> {
        let missing: Vec<&'static str> = slots
            .iter()
            .filter(|slot| !self.has_template(slot.name()))
            .map(Slot::name)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(GotestsError::MissingSlots(missing))
        }
    }

    /// Render the `header` template, then append `header.code` verbatim.
    pub fn render_header<W: Write + ?Sized>(&self, w: &mut W, header: &Header) -> Result<()> {
        let text = self.execute(Slot::Header, &HeaderView::new(header))?;
        w.write_all(text.as_bytes()).map_err(GotestsError::Write)?;
        w.write_all(&header.code).map_err(GotestsError::Write)?;
        Ok(())
    }

    /// Render the `function` template for one declaration.
    ///
    /// `constructor`, when given, builds the receiver instead of a field-by-field literal.
    pub fn render_function<W: Write + ?Sized>(
        &self,
        w: &mut W,
        function: &Function,
        header: &Header,
        constructor: Option<&Function>,
        options: &RenderOptions,
    ) -> Result<()> {
        let ctx = FunctionContext::new(
            function,
            header,
            constructor,
            options,
            self.classifier.as_ref(),
        );
        let text = self.execute(Slot::Function, &ctx)?;
        w.write_all(text.as_bytes()).map_err(GotestsError::Write)?;
        Ok(())
    }

    fn execute<T: Serialize>(&self, slot: Slot, data: &T) -> Result<String> {
        let text = self
            .hbs
            .render(slot.name(), data)
            .map_err(|source| GotestsError::TemplateExecution {
                template: slot.name().to_string(),
                source,
            })?;
        tracing::debug!("rendered template '{slot}' ({} bytes)", text.len());
        Ok(text)
    }
}

impl fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("templates", &self.template_names())
            .finish_non_exhaustive()
    }
}

fn engine(classifier: &Arc<dyn TypeClassifier>) -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_escape_fn(handlebars::no_escape);
    helpers::register(&mut hbs, Arc::clone(classifier));
    hbs
}
