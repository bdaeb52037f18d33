//! Wikitext markup stripping.
//!
//! Turns one line of wikitext into the text a reader would see: templates,
//! references and media links vanish, links keep their label, emphasis quotes
//! and list markers go, and known HTML tags are reduced to their text.

use std::borrow::Cow;

use crate::dom;
use crate::patterns::{
    BEHAVIOR_SWITCH, BR_TAG, EMPHASIS, EXTERNAL_LINK, HTML_COMMENT, HTML_TAG, LIST_MARKER,
    MEDIA_LINK, REF_TAG, TABLE_CELL_SEPARATOR, TABLE_STRUCTURE, WIKILINK,
};
use crate::wikitext::braces::remove_templates;

/// Strip wiki markup from a single line, keeping human-readable text.
///
/// Returns an empty string when nothing readable remains.
///
/// # Example
///
/// ```
/// use wikichapter::wikitext::strip::strip_markup;
///
/// let line = "'''Prologue''' takes place in [[Sacae|the plains]].{{Ref|1}}";
/// assert_eq!(strip_markup(line), "Prologue takes place in the plains.");
/// ```
#[must_use]
pub fn strip_markup(line: &str) -> String {
    let text = HTML_COMMENT.replace_all(line, "");
    let text = REF_TAG.replace_all(&text, "");
    let text = remove_templates(&text);
    let text = strip_table_row(text.trim());
    let text = MEDIA_LINK.replace_all(&text, "");
    let text = WIKILINK.replace_all(&text, |caps: &regex::Captures| {
        caps.get(2)
            .map_or_else(|| caps[1].to_string(), |label| label.as_str().to_string())
    });
    let text = EXTERNAL_LINK.replace_all(&text, |caps: &regex::Captures| {
        caps.get(1).map_or("", |m| m.as_str()).to_string()
    });
    let text = EMPHASIS.replace_all(&text, "");
    let text = BEHAVIOR_SWITCH.replace_all(&text, "");
    let text = LIST_MARKER.replace(text.trim_start(), "");
    let text = BR_TAG.replace_all(&text, " ");

    dom::collapse_whitespace(&html_to_text(&text))
}

/// Reduce a wiki table row to its cell text.
///
/// Structure rows (`{|`, `|-`, `|+`, `|}`) have none. Cell rows lose their
/// leading marker and have their cells joined with ` | `.
fn strip_table_row(line: &str) -> Cow<'_, str> {
    if TABLE_STRUCTURE.is_match(line) {
        return Cow::Borrowed("");
    }
    // Leading `|` or `!` marks a cell row.
    match line.strip_prefix('|').or_else(|| line.strip_prefix('!')) {
        Some(cells) => {
            let cells: Vec<&str> = TABLE_CELL_SEPARATOR
                .split(cells)
                .map(|cell| cell_content(cell).trim())
                .filter(|cell| !cell.is_empty())
                .collect();
            Cow::Owned(cells.join(" | "))
        }
        None => Cow::Borrowed(line),
    }
}

/// Drop a cell's attribute prefix (`style="..." | text`).
fn cell_content(cell: &str) -> &str {
    match cell.split_once('|') {
        Some((attrs, content)) if attrs.contains('=') && !attrs.contains("[[") => content,
        _ => cell,
    }
}

/// Formatting tags that may appear inside wikitext prose.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "big", "cite", "code", "del", "dfn", "em", "font", "i", "ins", "kbd",
    "mark", "nowiki", "q", "s", "small", "span", "strike", "strong", "sub", "sup", "tt", "u",
    "var",
];

/// Drop known HTML tags and decode entities.
///
/// Only tags named in [`INLINE_TAGS`] or the block element list are removed;
/// any other `<` (`HP<Def`, `<title>`) stays literal text.
fn html_to_text(text: &str) -> Cow<'_, str> {
    let text = HTML_TAG.replace_all(text, |caps: &regex::Captures| {
        let name = caps[1].to_ascii_lowercase();
        if INLINE_TAGS.contains(&name.as_str()) {
            String::new()
        } else if matches!(name.as_str(), "center" | "poem")
            || dom::BLOCK_ELEMENTS.contains(&name.as_str())
        {
            " ".to_string()
        } else {
            caps[0].to_string()
        }
    });
    if !text.contains('&') {
        return text;
    }
    // Escape what is left so the parser only decodes entities.
    let doc = dom::parse(&format!("<p>{}</p>", text.replace('<', "&lt;")));
    Cow::Owned(dom::collapsed_text(&doc.select("p")))
}
