//! Loading template sources into a Handlebars registry.
//!
//! A source text declares named templates as top-level blocks:
//!
//! ```text
//! {{#*inline "call"~}}
//! {{Name}}({{#each Parameters}}...{{/each}})
//! {{~/inline}}
//! ```
//!
//! Each block is registered under its name, so any template can include another
//! with `{{> call}}` and a custom set can override any single one. A line holding
//! only the opening or closing tag does not contribute its line break to the body.
//! Files without any block are registered whole under their file stem.
//!
//! An empty list of raw texts loads an empty registry. Every other source must
//! yield at least one template.

use std::path::Path;

use handlebars::Handlebars;

use crate::config::TemplateSource;
use crate::error::{GotestsError, Result};
use crate::templates::embedded::{self, TemplateFile, MAX_SET_ENTRIES};

const OPEN_KEYWORD: &str = "#*inline";
const CLOSE_KEYWORD: &str = "/inline";

/// A named template body extracted from a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub body: String,
}

/// Register every template of `source` into `hbs`, returning how many were registered.
pub fn load(hbs: &mut Handlebars<'static>, source: &TemplateSource) -> Result<usize> {
    let count = match source {
        TemplateSource::Defaults => load_files(hbs, "defaults", embedded::DEFAULT)?,
        TemplateSource::Texts { texts } => load_texts(hbs, texts)?,
        TemplateSource::Directory { path } => load_dir(hbs, path)?,
        TemplateSource::Named { name } => load_named_set(hbs, name)?,
    };
    if count == 0 && !matches!(source, TemplateSource::Texts { .. }) {
        return Err(GotestsError::EmptyTemplateSet(source.to_string()));
    }
    tracing::info!("loaded {count} templates from {source}");
    Ok(count)
}

fn load_files(hbs: &mut Handlebars<'static>, set: &str, files: &[TemplateFile]) -> Result<usize> {
    let mut count = 0;
    for file in files {
        let origin = format!("{set}/{}", file.name);
        count += register_source(hbs, &origin, file.text, Some(&file_stem(file.name)))?;
    }
    Ok(count)
}

fn load_texts(hbs: &mut Handlebars<'static>, texts: &[String]) -> Result<usize> {
    let mut count = 0;
    for (i, text) in texts.iter().enumerate() {
        count += register_source(hbs, &format!("text #{i}"), text, None)?;
    }
    Ok(count)
}

fn load_dir(hbs: &mut Handlebars<'static>, dir: &Path) -> Result<usize> {
    let read_err = |path: &Path, source| GotestsError::TemplateRead {
        path: path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| read_err(dir, e))? {
        let path = entry.map_err(|e| read_err(dir, e))?.path();
        if path.is_file() {
            paths.push(path);
        } else {
            tracing::debug!("skipping non-file template entry {}", path.display());
        }
    }
    paths.sort();

    let mut count = 0;
    for path in &paths {
        let text = std::fs::read_to_string(path).map_err(|e| read_err(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let origin = path.display().to_string();
        count += register_source(hbs, &origin, &text, Some(&file_stem(&name)))?;
    }
    Ok(count)
}

fn load_named_set(hbs: &mut Handlebars<'static>, name: &str) -> Result<usize> {
    let files = embedded::named_set(name).ok_or_else(|| GotestsError::UnknownTemplateSet {
        name: name.to_string(),
        available: embedded::available_sets(),
    })?;
    load_files(hbs, name, bounded(name, files))
}

/// The first [`MAX_SET_ENTRIES`] files of a named set.
fn bounded<'a>(name: &str, files: &'a [TemplateFile]) -> &'a [TemplateFile] {
    if files.len() > MAX_SET_ENTRIES {
        tracing::warn!(
            "template set '{name}' has {} entries, only the first {MAX_SET_ENTRIES} are loaded",
            files.len()
        );
    }
    &files[..files.len().min(MAX_SET_ENTRIES)]
}

/// Register the definitions of one source text.
///
/// Without definitions the whole text is registered under `fallback`; when there
/// is no fallback name the text is rejected.
fn register_source(
    hbs: &mut Handlebars<'static>,
    origin: &str,
    text: &str,
    fallback: Option<&str>,
) -> Result<usize> {
    let defs = definitions(origin, text)?;
    if defs.is_empty() {
        return match fallback {
            Some(name) => {
                register(hbs, origin, name, text)?;
                Ok(1)
            }
            None => Err(GotestsError::MalformedDefinition {
                origin: origin.to_string(),
                reason: "no {{#*inline}} definitions found".into(),
            }),
        };
    }
    for def in &defs {
        register(hbs, origin, &def.name, &def.body)?;
    }
    Ok(defs.len())
}

fn register(hbs: &mut Handlebars<'static>, origin: &str, name: &str, body: &str) -> Result<()> {
    if hbs.has_template(name) {
        tracing::warn!("template '{name}' from {origin} replaces an earlier definition");
    }
    hbs.register_template_string(name, body)
        .map_err(|source| GotestsError::TemplateParse {
            name: name.to_string(),
            origin: origin.to_string(),
            source,
        })?;
    tracing::debug!("registered template '{name}' from {origin}");
    Ok(())
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Split a source text into its top-level `{{#*inline "name"}}` blocks.
///
/// Text outside the blocks is ignored. Nested blocks stay inside the body of the
/// enclosing one, where Handlebars treats them as local partials.
pub fn definitions(origin: &str, text: &str) -> Result<Vec<Definition>> {
    let malformed = |reason: String| GotestsError::MalformedDefinition {
        origin: origin.to_string(),
        reason,
    };

    let mut defs = Vec::new();
    let mut cursor = 0;
    while let Some(open) = next_tag(text, cursor) {
        if open.kind == TagKind::Close {
            return Err(malformed(format!(
                "unexpected {{{{/inline}}}} at byte {}",
                open.start
            )));
        }
        let name = parse_name(open.args).ok_or_else(|| {
            malformed(format!("definition at byte {} has no quoted name", open.start))
        })?;
        let close = matching_close(text, open.end)
            .ok_or_else(|| malformed(format!("definition '{name}' is never closed")))?;
        defs.push(Definition {
            name,
            body: body(text, &open, &close).to_string(),
        });
        cursor = close.end;
    }
    Ok(defs)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Open,
    Close,
}

#[derive(Debug)]
struct Tag<'a> {
    kind: TagKind,
    start: usize,
    end: usize,
    strip_before: bool,
    strip_after: bool,
    args: &'a str,
}

fn next_tag(text: &str, from: usize) -> Option<Tag<'_>> {
    let mut cursor = from;
    while let Some(offset) = text[cursor..].find("{{") {
        let start = cursor + offset;
        let close = start + 2 + text[start + 2..].find("}}")?;
        let raw = text[start + 2..close].trim();
        let inner = raw.trim_start_matches('~').trim_end_matches('~').trim();
        let kind = if let Some(args) = inner.strip_prefix(OPEN_KEYWORD) {
            Some((TagKind::Open, args.trim()))
        } else if inner == CLOSE_KEYWORD {
            Some((TagKind::Close, ""))
        } else {
            None
        };
        if let Some((kind, args)) = kind {
            return Some(Tag {
                kind,
                start,
                end: close + 2,
                strip_before: raw.starts_with('~'),
                strip_after: raw.ends_with('~'),
                args,
            });
        }
        cursor = close + 2;
    }
    None
}

fn matching_close<'a>(text: &'a str, from: usize) -> Option<Tag<'a>> {
    let mut depth = 1usize;
    let mut cursor = from;
    while let Some(tag) = next_tag(text, cursor) {
        match tag.kind {
            TagKind::Open => depth += 1,
            TagKind::Close => {
                depth -= 1;
                if depth == 0 {
                    return Some(tag);
                }
            }
        }
        cursor = tag.end;
    }
    None
}

fn parse_name(args: &str) -> Option<String> {
    let quote = args.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &args[1..];
    let end = rest.find(quote)?;
    let name = &rest[..end];
    if name.is_empty() || !rest[end + 1..].trim().is_empty() {
        return None;
    }
    Some(name.to_string())
}

fn body<'a>(text: &'a str, open: &Tag<'_>, close: &Tag<'_>) -> &'a str {
    let mut body = &text[open.end..close.start];
    if open.strip_after {
        body = body.trim_start();
    } else if let Some(rest) = body.strip_prefix("\r\n").or_else(|| body.strip_prefix('\n')) {
        body = rest;
    }
    if close.strip_before {
        body = body.trim_end();
    } else {
        let line_start = body.rfind('\n').map_or(0, |i| i + 1);
        if body[line_start..].trim().is_empty() {
            body = &body[..line_start];
        }
    }
    body
}
