//! Chapter extraction from raw wikitext.
//!
//! # Module Structure
//!
//! - `braces`: Template span matching over nested `{{`/`}}`
//! - `strip`: Line-level markup stripping
//! - `infobox`: Chapter infobox template parameters
//! - `sections`: Heading-delimited sections
//! - `summary`: Lead summary detection

pub mod braces;
pub mod infobox;
pub mod sections;
pub mod strip;
pub mod summary;

pub use braces::{find_template, match_template};
pub use infobox::extract_infobox;
pub use sections::extract_sections;
pub use strip::strip_markup;
pub use summary::extract_summary;

use crate::options::Options;
use crate::result::ChapterDocument;

/// Run the infobox, section and summary extractors over one page.
#[must_use]
pub fn parse_chapter(wikitext: &str, options: &Options) -> ChapterDocument {
    ChapterDocument {
        infobox: extract_infobox(wikitext, options),
        sections: extract_sections(wikitext),
        summary: extract_summary(wikitext, options),
    }
}
