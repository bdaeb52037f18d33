//! Chapter infobox extraction from wikitext.
//!
//! The infobox is a single template invocation whose parameters are written
//! one per line:
//!
//! ```text
//! {{Chapterinfobox
//! |title=Prologue
//! |game=Blazing Blade
//! |objective=Rout the enemy
//! }}
//! ```
//!
//! Values may continue over several lines until the next `|` line.

use tracing::debug;

use crate::options::Options;
use crate::result::{Field, Infobox};
use crate::wikitext::braces::find_template;

/// A raw template parameter, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParam {
    /// Parameter name, trimmed and lower-cased.
    pub name: String,
    /// Value with continuation lines joined by `\n`, trimmed.
    pub value: String,
}

/// Extract the chapter infobox from page wikitext.
///
/// A page without the infobox template (or with unbalanced braces) yields an
/// empty `Infobox`. The `title` parameter becomes `Infobox::title` and is not
/// repeated in `fields`; every other parameter becomes one field, duplicates
/// included.
#[must_use]
pub fn extract_infobox(wikitext: &str, options: &Options) -> Infobox {
    let Some(span) = find_template(wikitext, &options.infobox_template) else {
        debug!(template = %options.infobox_template, "no infobox template found");
        return Infobox::default();
    };

    let body = template_body(&wikitext[span], &options.infobox_template);
    let mut infobox = Infobox::default();
    for param in parse_parameters(body) {
        if param.name == "title" {
            infobox.title = Some(param.value).filter(|t| !t.is_empty());
            continue;
        }
        let label = display_label(&param.name, options);
        infobox.fields.push(Field::new(label, param.value));
    }

    debug!(fields = infobox.fields.len(), title = ?infobox.title, "parsed wikitext infobox");
    infobox
}

/// Strip the braces and the template name from a matched template block.
fn template_body<'a>(block: &'a str, name: &str) -> &'a str {
    let inner = block.trim();
    let inner = inner.strip_prefix("{{").unwrap_or(inner);
    let inner = inner.strip_suffix("}}").unwrap_or(inner);
    inner.strip_prefix(name).unwrap_or(inner)
}

/// Split a template body into its line-delimited parameters.
///
/// Every line starting with `|` (after leading whitespace) opens a parameter;
/// other lines continue the value of the open one. Text before the first `|`
/// line belongs to no parameter and is ignored.
#[must_use]
pub fn parse_parameters(body: &str) -> Vec<TemplateParam> {
    let mut params = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in body.lines() {
        let stripped = line.trim_start();
        if let Some(rest) = stripped.strip_prefix('|') {
            if let Some((name, lines)) = current.take() {
                params.push(finish_param(name, &lines));
            }
            current = Some(match rest.split_once('=') {
                Some((name, value)) => (name.trim().to_lowercase(), vec![value.trim()]),
                None => (rest.trim().to_lowercase(), Vec::new()),
            });
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(stripped);
        }
    }

    if let Some((name, lines)) = current {
        params.push(finish_param(name, &lines));
    }
    params
}

fn finish_param(name: String, lines: &[&str]) -> TemplateParam {
    TemplateParam {
        name,
        value: lines.join("\n").trim().to_string(),
    }
}

/// Display label for a raw parameter name.
///
/// Names in the configured label table map directly; anything else is
/// title-cased with underscores read as spaces (`units_lost` → `Units Lost`).
#[must_use]
pub fn display_label(raw_name: &str, options: &Options) -> String {
    match options.label_for(raw_name) {
        Some(label) => label.to_string(),
        None => title_case(raw_name.replace('_', " ").trim()),
    }
}

/// Uppercase the first letter of every word and lowercase the rest.
/// A word starts at any letter not preceded by another letter.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_letter = false;
    for ch in text.chars() {
        if prev_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_letter = ch.is_alphabetic();
    }
    out
}
