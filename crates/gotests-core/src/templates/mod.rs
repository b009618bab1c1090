//! Template system for generated Go test files.
//!
//! Bundled sets are embedded at compile-time via [`include_str!`] in the
//! [`embedded`] module; custom sets come from raw texts or a directory. Either way
//! they are split into named definitions by [`loader`] and rendered with
//! [Handlebars](https://handlebarsjs.com/) through [`renderer::TemplateRenderer`].
//!
//! ## Template files
//!
//! A template file declares one or more definitions as top-level inline partials:
//!
//! ```handlebars
//! {{#*inline "message"~}}
//! {{Name}}()
//! {{~/inline}}
//! ```
//!
//! Each definition is registered under its own name and can be called from any
//! other with `{{> message}}`. A file in a template directory that declares no
//! definitions is registered whole under its file stem.
//!
//! ## Slots
//!
//! The renderer executes `header` and `function`; the bundled sets also define
//! `call`, `inputs`, `results`, `message`, `type` and `value` (see [`slot::Slot`]).
//! A custom set only needs the slots its own templates reference.
//!
//! **Warning**: files under `templates/` and the tables in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to that file and checked at compile-time.

pub mod context;
pub mod embedded;
pub mod helpers;
pub mod loader;
pub mod renderer;
pub mod slot;
