//! Chapter normalization.
//!
//! Flattens a parsed [`ChapterDocument`] into typed chapter attributes and the
//! ordered chunk sequence handed to indexing. Chunk indices are dense and
//! zero-based: the summary (if any) first, then one chunk per flattened
//! infobox field, then one per section line.

use indexmap::IndexMap;
use tracing::debug;

use crate::result::{ChapterDocument, Chunk, ChunkKind, Infobox, NormalizedChapter};

/// Normalize a parsed chapter.
///
/// # Example
///
/// ```
/// use wikichapter::{normalize, parse_from_wikitext, ChunkKind};
///
/// let doc = parse_from_wikitext(
///     "{{Chapterinfobox\n|number of allowed units=12 units\n}}\n'''Prologue''' begins.\n",
/// );
/// let chapter = normalize(&doc);
/// assert_eq!(chapter.units_allowed, Some(12));
/// assert_eq!(chapter.chunks[0].kind, ChunkKind::Summary);
/// assert_eq!(chapter.chunks[1].text, "Units Allowed: 12 units");
/// ```
#[must_use]
pub fn normalize(doc: &ChapterDocument) -> NormalizedChapter {
    let fields = flatten_fields(&doc.infobox);
    let lookup = |label: &str| fields.get(label).cloned();

    let chapter = NormalizedChapter {
        infobox_title: doc.infobox.title.clone(),
        game: lookup("Game"),
        objective: lookup("Objective"),
        units_allowed: fields.get("Units Allowed").and_then(|v| parse_leading_int(v)),
        units_gained: non_empty(lookup("Units Gained")).or_else(|| lookup("units gained")),
        boss: non_empty(lookup("Boss")).or_else(|| lookup("boss name")),
        chunks: build_chunks(doc, &fields),
        fields,
    };

    debug!(
        chunks = chapter.chunks.len(),
        fields = chapter.fields.len(),
        units_allowed = ?chapter.units_allowed,
        "normalized chapter"
    );
    chapter
}

/// Flatten infobox fields by label.
///
/// A repeated label keeps the position of its first occurrence and the value
/// of its last. Fields without a label are skipped.
#[must_use]
pub fn flatten_fields(infobox: &Infobox) -> IndexMap<String, String> {
    let mut map = IndexMap::with_capacity(infobox.fields.len());
    for field in infobox.fields.iter().filter(|f| !f.label.is_empty()) {
        map.insert(field.label.clone(), field.value.clone());
    }
    map
}

/// Parse the first whitespace-separated token of `value` as an integer.
///
/// `"12 units"` gives `Some(12)`; `"varies"` and `""` give `None`.
#[must_use]
pub fn parse_leading_int(value: &str) -> Option<i64> {
    value.split_whitespace().next()?.parse().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn build_chunks(doc: &ChapterDocument, fields: &IndexMap<String, String>) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut push = |kind: ChunkKind, section_title: Option<&str>, text: String| {
        let index = chunks.len();
        chunks.push(Chunk {
            kind,
            section_title: section_title.map(str::to_string),
            index,
            text,
        });
    };

    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.is_empty()) {
        push(ChunkKind::Summary, None, summary.to_string());
    }
    for (label, value) in fields {
        push(ChunkKind::Infobox, None, format!("{label}: {value}"));
    }
    for section in &doc.sections {
        for line in &section.content {
            push(ChunkKind::Section, Some(&section.title), line.clone());
        }
    }
    chunks
}
