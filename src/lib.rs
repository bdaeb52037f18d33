//! # wikichapter
//!
//! Structured chapter extraction from MediaWiki walkthrough pages.
//!
//! A chapter page is reduced to a [`ChapterDocument`]: the infobox (title,
//! image, label/value fields), the titled sections of readable text and, for
//! wikitext, the lead summary line. Both raw wikitext and rendered HTML are
//! accepted and yield the same shapes.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikichapter::{normalize, parse_from_wikitext};
//!
//! let wikitext = "{{Chapterinfobox\n|title=Prologue\n|game=Blazing Blade\n|objective=Rout the enemy\n}}\n\
//! '''Prologue''' is the first chapter.\n\
//! == Strategy ==\n\
//! * Move Lyn first.\n";
//!
//! let doc = parse_from_wikitext(wikitext);
//! assert_eq!(doc.infobox.title.as_deref(), Some("Prologue"));
//! assert_eq!(doc.summary.as_deref(), Some("Prologue is the first chapter."));
//! assert_eq!(doc.sections[0].content, vec!["Move Lyn first."]);
//!
//! let chapter = normalize(&doc);
//! assert_eq!(chapter.game.as_deref(), Some("Blazing Blade"));
//! assert_eq!(chapter.chunks.len(), 4);
//! ```
//!
//! ## Failure Model
//!
//! Extraction over text never fails. A missing infobox, missing headings or
//! unbalanced template braces produce empty or partial output. Only the byte
//! entry points return errors, for input that is not UTF-8.
//!
//! Every function is pure and holds no shared state, so independent pages
//! can be parsed concurrently.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Wikitext extraction (brace matching, infobox, sections, summary).
pub mod wikitext;

/// Rendered HTML extraction (infobox, sections).
pub mod html;

/// HTML table extraction (structured rows and Markdown).
pub mod tables;

/// Flattening of parsed chapters into attributes and indexable chunks.
pub mod normalize;

// Public API - re-exports
pub use error::{Error, Result};
pub use normalize::normalize;
pub use options::{Options, DEFAULT_FIELD_LABELS};
pub use result::{
    ChapterDocument, Chunk, ChunkKind, Field, Infobox, InfoboxImage, NormalizedChapter, Section,
    TableExtract,
};
pub use tables::{extract_tables_json, extract_tables_markdown};

/// Parses a rendered chapter page using default options.
///
/// The summary is always `None` on this path.
///
/// # Example
///
/// ```rust
/// use wikichapter::parse_from_html;
///
/// let html = r#"<div class="mw-parser-output">
///     <aside><h2 class="pi-title">Prologue</h2></aside>
///     <h2>Strategy</h2><p>Move Lyn first.</p>
/// </div>"#;
/// let doc = parse_from_html(html);
/// assert_eq!(doc.infobox.title.as_deref(), Some("Prologue"));
/// assert_eq!(doc.sections[0].title, "Strategy");
/// ```
#[must_use]
pub fn parse_from_html(html: &str) -> ChapterDocument {
    parse_from_html_with_options(html, &Options::default())
}

/// Parses a rendered chapter page with custom options.
#[must_use]
pub fn parse_from_html_with_options(html: &str, options: &Options) -> ChapterDocument {
    html::parse_chapter(html, options)
}

/// Parses chapter wikitext using default options.
///
/// # Example
///
/// ```rust
/// use wikichapter::{parse_from_wikitext, Field};
///
/// let doc = parse_from_wikitext("{{Chapterinfobox\n|title=Prologue\n|game=Blazing Blade\n}}");
/// assert_eq!(doc.infobox.title.as_deref(), Some("Prologue"));
/// assert_eq!(doc.infobox.fields, vec![Field::new("Game", "Blazing Blade")]);
/// ```
#[must_use]
pub fn parse_from_wikitext(wikitext: &str) -> ChapterDocument {
    parse_from_wikitext_with_options(wikitext, &Options::default())
}

/// Parses chapter wikitext with custom options.
#[must_use]
pub fn parse_from_wikitext_with_options(wikitext: &str, options: &Options) -> ChapterDocument {
    wikitext::parse_chapter(wikitext, options)
}

/// Parses a rendered chapter page given as raw bytes.
///
/// A leading byte order mark is ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8.
pub fn parse_from_html_bytes(html: &[u8]) -> Result<ChapterDocument> {
    Ok(parse_from_html(&decode_utf8(html)?))
}

/// Parses chapter wikitext given as raw bytes.
///
/// A leading byte order mark is ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8.
pub fn parse_from_wikitext_bytes(wikitext: &[u8]) -> Result<ChapterDocument> {
    Ok(parse_from_wikitext(&decode_utf8(wikitext)?))
}

/// Strictly decode UTF-8, dropping a BOM. Malformed input is an error rather
/// than being replaced with U+FFFD.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not valid UTF-8.
pub fn decode_utf8(bytes: &[u8]) -> Result<std::borrow::Cow<'_, str>> {
    encoding_rs::UTF_8
        .decode_without_bom_handling_and_without_replacement(
            bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes),
        )
        .ok_or_else(|| Error::InvalidUtf8 {
            valid_up_to: encoding_rs::Encoding::utf8_valid_up_to(bytes),
        })
}
