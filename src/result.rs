//! Result types for extraction output.
//!
//! These are plain owned values: nothing here borrows from the markup it was
//! extracted from, so documents can be moved across threads, cached or
//! serialised freely by the caller.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A chapter page reduced to infobox, sections and (wikitext only) a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDocument {
    /// Structured infobox panel. Empty when the page has none.
    pub infobox: Infobox,

    /// Titled sections in document order. Sections without content are never present.
    pub sections: Vec<Section>,

    /// Lead narrative line. Only the wikitext parser fills this in.
    pub summary: Option<String>,
}

impl ChapterDocument {
    /// Serialise the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Infobox panel of a chapter page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infobox {
    /// Panel title (`title` template parameter, or the rendered title element).
    pub title: Option<String>,

    /// Panel image. Only rendered HTML carries one.
    pub image: Option<InfoboxImage>,

    /// Fields in source order. Duplicate labels are kept as separate entries.
    pub fields: Vec<Field>,
}

impl Infobox {
    /// True when no title, image or field was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.image.is_none() && self.fields.is_empty()
    }
}

/// Image shown in a rendered infobox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoboxImage {
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// One label/value pair of an infobox.
///
/// Both the raw template parameters and the rendered label/value elements end
/// up as this one type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Display label. Empty when a rendered field has no label element.
    pub label: String,

    pub value: String,

    /// Header of the enclosing infobox group (rendered HTML only).
    pub group: Option<String>,
}

impl Field {
    /// Create an ungrouped field.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            group: None,
        }
    }
}

/// A titled run of text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,

    /// Non-empty lines in document order.
    pub content: Vec<String>,
}

/// A data table recovered from rendered HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableExtract {
    pub caption: Option<String>,

    /// Cell texts of the first row.
    pub headers: Vec<String>,

    /// One map per data row, keyed by header (or `col_N` past the last header).
    pub rows: Vec<IndexMap<String, String>>,
}

/// Origin of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Summary,
    Infobox,
    Section,
}

impl ChunkKind {
    /// Lowercase name, as stored by indexing pipelines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Infobox => "infobox",
            Self::Section => "section",
        }
    }
}

/// A unit of text prepared for downstream indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub kind: ChunkKind,

    /// Title of the section the line came from (section chunks only).
    pub section_title: Option<String>,

    /// Zero-based position in emission order, without gaps.
    pub index: usize,

    pub text: String,
}

/// Flattened chapter attributes plus the ordered chunk sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedChapter {
    pub infobox_title: Option<String>,
    pub game: Option<String>,
    pub objective: Option<String>,

    /// Leading integer of the `Units Allowed` field, when it has one.
    pub units_allowed: Option<i64>,

    pub units_gained: Option<String>,
    pub boss: Option<String>,

    /// Label to value. A repeated label keeps its first position and its last value.
    pub fields: IndexMap<String, String>,

    pub chunks: Vec<Chunk>,
}

impl NormalizedChapter {
    /// Title used to identify the chapter: the infobox title if present,
    /// otherwise the page title.
    #[must_use]
    pub fn lookup_title<'a>(&'a self, page_title: &'a str) -> &'a str {
        self.infobox_title.as_deref().unwrap_or(page_title)
    }
}
