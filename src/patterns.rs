//! Compiled regex patterns for wikitext and text cleanup.
//!
//! All patterns are compiled once using `LazyLock`.
//! Patterns are organized by the extraction step that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Structure
// =============================================================================

/// A full-line heading: two or more `=`, the title, and a closing `=` run.
/// Capture 1 is the title without surrounding whitespace.
pub static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^==+\s*(.+?)\s*==+\s*$").expect("HEADING regex")
});

/// Start of any heading line, used to bound the summary search window.
pub static HEADING_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^==+").expect("HEADING_START regex"));

// =============================================================================
// Markup Stripping
// =============================================================================

/// HTML comments. An unterminated comment runs to the end of the text.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|$)").expect("HTML_COMMENT regex"));

/// Footnote references, paired or self-closing.
pub static REF_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<ref\b[^>]*/>|<ref\b[^>]*>.*?</ref\s*>").expect("REF_TAG regex")
});

/// Media and category links, which carry no readable text.
/// Allows one level of nested links inside image captions.
pub static MEDIA_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[\[\s*(?:file|image|category)\s*:[^\[\]]*(?:\[\[[^\[\]]*\]\][^\[\]]*)*\]\]")
        .expect("MEDIA_LINK regex")
});

/// Internal links. Capture 1 is the target, capture 2 the optional label.
pub static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\[\]|]*)(?:\|([^\[\]]*))?\]\]").expect("WIKILINK regex")
});

/// Bracketed external links. Capture 1 is the optional label.
pub static EXTERNAL_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:https?:)?//[^\s\]]+(?:\s+([^\]]*))?\]").expect("EXTERNAL_LINK regex")
});

/// Bold and italic quote runs.
pub static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'{2,5}").expect("EMPHASIS regex"));

/// Behaviour switches such as `__NOTOC__`.
pub static BEHAVIOR_SWITCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__[A-Z]+__").expect("BEHAVIOR_SWITCH regex"));

/// Leading list, indent and definition markers.
pub static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*#:;]+\s*").expect("LIST_MARKER regex"));

/// Wiki table rows that carry no cell text.
pub static TABLE_STRUCTURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\{\||\|\}|\|-|\|\+)").expect("TABLE_STRUCTURE regex"));

/// Cell separators within a single wiki table row.
pub static TABLE_CELL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:\|\||!!)\s*").expect("TABLE_CELL_SEPARATOR regex"));

/// Anything shaped like an opening, closing or self-closing tag.
/// Capture 1 is the tag name.
pub static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?([a-z][a-z0-9]*)\b[^<>]*>").expect("HTML_TAG regex")
});

/// Line breaks written as tags.
pub static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("BR_TAG regex"));

// =============================================================================
// Text Cleaning
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));
