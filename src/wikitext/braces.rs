//! Template brace matching.
//!
//! Templates nest (`{{A|{{B}}}}`), so their extent is found with an explicit
//! depth counter over a single linear scan. Only ASCII braces are inspected,
//! which keeps every returned offset on a UTF-8 character boundary.

use std::ops::Range;

use tracing::trace;

/// Return the span of the template opening at `start`.
///
/// `start` must point at a `{{` marker. The scan counts `{{` as one level
/// deeper and `}}` as one level out, and the span ends just past the `}}`
/// that brings the depth back to zero.
///
/// Returns `None` if there is no `{{` at `start` or the braces never balance
/// before the end of the text.
///
/// # Example
///
/// ```
/// use wikichapter::wikitext::braces::match_template;
///
/// let text = "x {{A|{{B}}}} y";
/// assert_eq!(match_template(text, 2), Some(2..13));
/// assert_eq!(match_template("{{open", 0), None);
/// ```
#[must_use]
pub fn match_template(text: &str, start: usize) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    if !bytes.get(start..)?.starts_with(b"{{") {
        return None;
    }

    let mut depth: usize = 0;
    let mut i = start;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'{', b'{') => {
                depth += 1;
                i += 2;
            }
            (b'}', b'}') => {
                depth = depth.saturating_sub(1);
                i += 2;
                if depth == 0 {
                    return Some(start..i);
                }
            }
            _ => i += 1,
        }
    }

    trace!(start, "unbalanced template braces");
    None
}

/// Locate the first invocation of template `name` and return its span.
///
/// The name is matched case-sensitively against the literal `{{name` prefix
/// and must end there: `{{Chapterinfobox2` is not `Chapterinfobox`.
#[must_use]
pub fn find_template(text: &str, name: &str) -> Option<Range<usize>> {
    let marker = format!("{{{{{name}");
    let start = text.match_indices(&marker).map(|(i, _)| i).find(|&i| {
        text[i + marker.len()..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '-'))
    })?;
    match_template(text, start)
}

/// Remove every balanced template from `text`.
///
/// An opener without a matching close is kept as literal text; scanning
/// resumes right after it, so later balanced templates are still removed.
#[must_use]
pub fn remove_templates(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("{{") {
        match match_template(rest, open) {
            Some(span) => {
                out.push_str(&rest[..span.start]);
                rest = &rest[span.end..];
            }
            None => {
                out.push_str(&rest[..open + 2]);
                rest = &rest[open + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}
