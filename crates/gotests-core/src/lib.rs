//! Core library for gotests: renders table-driven Go test skeletons.
//!
//! The caller describes a Go source file with the model types ([`function::Function`],
//! [`field::Field`], [`expression::Expression`], [`header::Header`]) and hands them to a
//! [`templates::renderer::TemplateRenderer`], which writes the test file header and one
//! test function per declaration.
//!
//! Parsing Go source and choosing which functions to test are left to the caller;
//! this crate only turns the model into text.

pub mod classify;
pub mod config;
pub mod error;
pub mod expression;
pub mod field;
pub mod function;
pub mod header;
pub mod naming;
pub mod path;
pub mod templates;

pub use config::{GeneratorConfig, RenderOptions, TemplateSource};
pub use error::{GotestsError, Result};
pub use templates::renderer::TemplateRenderer;
