//! Section extraction from rendered HTML.
//!
//! Rendered pages keep headings, paragraphs and lists as flat siblings of the
//! content container, so sections are recovered by walking its direct
//! children in order.

use tracing::debug;

use crate::dom::{self, Selection};
use crate::options::Options;
use crate::result::Section;

/// Split the direct children of `container` into titled sections.
///
/// A heading (per `Options::heading_levels`) with text opens a section;
/// `<p>` adds one line and `<ul>`/`<ol>` add one line per direct `<li>`.
/// Content before the first heading, and sections that collect no lines,
/// are dropped.
#[must_use]
pub fn extract_sections(container: &Selection, options: &Options) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    for child in dom::element_children(container) {
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };

        if options.is_heading(&tag) {
            let title = heading_title(&child);
            if title.is_empty() {
                continue;
            }
            sections.extend(current.take().filter(|s| !s.content.is_empty()));
            current = Some(Section {
                title,
                content: Vec::new(),
            });
            continue;
        }

        let Some(section) = current.as_mut() else {
            continue;
        };
        match tag.as_str() {
            "p" => push_line(&mut section.content, &child),
            "ul" | "ol" => {
                for item in dom::element_children(&child) {
                    if dom::tag_name(&item).as_deref() == Some("li") {
                        push_line(&mut section.content, &item);
                    }
                }
            }
            _ => {}
        }
    }
    sections.extend(current.filter(|s| !s.content.is_empty()));

    debug!(sections = sections.len(), "parsed html sections");
    sections
}

/// Heading text without the "[edit]" links MediaWiki renders beside it.
fn heading_title(heading: &Selection) -> String {
    dom::first_match(heading, &[".mw-headline"])
        .map_or_else(|| dom::collapsed_text(heading), |headline| dom::collapsed_text(&headline))
}

fn push_line(lines: &mut Vec<String>, element: &Selection) {
    let text = dom::collapsed_text(element);
    if !text.is_empty() {
        lines.push(text);
    }
}
