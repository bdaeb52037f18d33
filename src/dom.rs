//! DOM Operations Adapter
//!
//! Small set of helpers over the `dom_query` crate used by the HTML
//! extractors and the markup stripper.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

use crate::patterns::WHITESPACE_NORMALIZE;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// Elements whose content never runs into neighbouring text.
pub(crate) const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p",
    "section", "table", "td", "th", "tr", "ul",
];

/// Text content with whitespace runs collapsed to single spaces.
///
/// Inline markup joins as written (`<a>Sacae</a>.` reads `Sacae.`), while
/// `<br>` and block elements separate words: `Lyn<br>Sain` reads `Lyn Sain`.
#[must_use]
pub fn collapsed_text(sel: &Selection) -> String {
    let mut text = String::new();
    for node in sel.nodes() {
        collect_text(node, &mut text);
    }
    collapse_whitespace(&text)
}

enum Visit<'a> {
    Node(dom_query::NodeRef<'a>),
    Break,
}

fn collect_text(root: &dom_query::NodeRef, out: &mut String) {
    let mut stack: Vec<Visit> = root.children().into_iter().rev().map(Visit::Node).collect();
    while let Some(visit) = stack.pop() {
        let node = match visit {
            Visit::Break => {
                out.push(' ');
                continue;
            }
            Visit::Node(node) => node,
        };

        if node.is_text() {
            out.push_str(&node.text());
        } else if node.is_element() {
            let separates = node.node_name().is_some_and(|tag| {
                let tag: &str = &tag;
                tag == "br" || BLOCK_ELEMENTS.contains(&tag)
            });
            if separates {
                out.push(' ');
                stack.push(Visit::Break);
            }
            stack.extend(node.children().into_iter().rev().map(Visit::Node));
        }
    }
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

// === Tree Navigation ===

/// Direct element children, in document order.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children().iter().collect()
}

/// Nearest ancestor (excluding the element itself) carrying `class`.
#[must_use]
pub fn closest_ancestor_with_class<'a>(sel: &Selection<'a>, class: &str) -> Option<Selection<'a>> {
    let mut current = sel.parent();
    while current.exists() {
        if current.has_class(class) {
            return Some(current);
        }
        current = current.parent();
    }
    None
}

/// First element matching any of `selectors`, tried in order.
#[must_use]
pub fn first_match<'a>(sel: &Selection<'a>, selectors: &[&str]) -> Option<Selection<'a>> {
    selectors
        .iter()
        .map(|s| sel.select_single(s))
        .find(Selection::exists)
}
