//! Chapter extraction from rendered HTML.
//!
//! # Module Structure
//!
//! - `infobox`: Portable infobox `<aside>` title, image and fields
//! - `sections`: Heading-delimited sections from the content container

pub mod infobox;
pub mod sections;

pub use infobox::extract_infobox;
pub use sections::extract_sections;

use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::result::ChapterDocument;

/// The content container named by `Options::content_selector`, or `<body>`
/// when the page has none or the selector does not parse.
#[must_use]
pub fn content_root<'a>(doc: &'a Document, options: &Options) -> Selection<'a> {
    if let Some(root) = doc
        .try_select(&options.content_selector)
        .map(|sel| sel.first())
        .filter(Selection::exists)
    {
        return root;
    }
    debug!(selector = %options.content_selector, "content container missing, using body");
    doc.select("body")
}

/// Run the infobox and section extractors over one rendered page.
///
/// The summary is never filled in: rendered HTML has no reliable marker for
/// the lead line.
#[must_use]
pub fn parse_chapter(html: &str, options: &Options) -> ChapterDocument {
    let doc = dom::parse(html);
    let root = content_root(&doc, options);
    ChapterDocument {
        infobox: extract_infobox(&root),
        sections: extract_sections(&root, options),
        summary: None,
    }
}
