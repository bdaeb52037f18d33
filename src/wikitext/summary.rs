//! Lead summary detection.
//!
//! Chapter pages open with the infobox, sometimes a few more templates
//! (notices, navigation), and then a lead paragraph whose first sentence
//! bolds the chapter name. The summary is that first bold line, found by
//! narrowing the page step by step:
//!
//! 1. [`locate_infobox_end`]: text after the infobox template.
//! 2. [`skip_adjacent_templates`]: drop templates directly following it.
//! 3. [`bound_by_heading`]: cut the window at the next heading.
//! 4. [`first_bold_line`]: first line with `'''` that has readable text.

use tracing::debug;

use crate::options::Options;
use crate::patterns::HEADING_START;
use crate::wikitext::braces::{find_template, match_template};
use crate::wikitext::strip::strip_markup;

/// Find the lead summary of a chapter page, if it has one.
///
/// # Example
///
/// ```
/// use wikichapter::wikitext::summary::extract_summary;
/// use wikichapter::Options;
///
/// let page = "{{Chapterinfobox\n|game=FE7\n}}\n'''Prologue''' opens the story.\n==Story==\n";
/// assert_eq!(
///     extract_summary(page, &Options::default()).as_deref(),
///     Some("Prologue opens the story.")
/// );
/// ```
#[must_use]
pub fn extract_summary(wikitext: &str, options: &Options) -> Option<String> {
    let after = locate_infobox_end(wikitext, &options.infobox_template)?;
    let after = skip_adjacent_templates(after)?;
    let summary = first_bold_line(bound_by_heading(after));
    debug!(found = summary.is_some(), "summary search finished");
    summary
}

/// Text following the infobox template, or `None` if the page has no
/// (balanced) infobox.
#[must_use]
pub fn locate_infobox_end<'a>(wikitext: &'a str, template: &str) -> Option<&'a str> {
    let span = find_template(wikitext, template)?;
    Some(&wikitext[span.end..])
}

/// Skip every template that directly follows, ignoring whitespace between them.
///
/// Returns the left-trimmed remainder, or `None` when one of the skipped
/// templates is never closed.
#[must_use]
pub fn skip_adjacent_templates(text: &str) -> Option<&str> {
    let mut rest = text.trim_start();
    while rest.starts_with("{{") {
        let span = match_template(rest, 0)?;
        rest = rest[span.end..].trim_start();
    }
    Some(rest)
}

/// Everything before the first heading line.
#[must_use]
pub fn bound_by_heading(text: &str) -> &str {
    HEADING_START.find(text).map_or(text, |m| &text[..m.start()])
}

/// First line carrying bold markup that still has text after stripping.
#[must_use]
pub fn first_bold_line(window: &str) -> Option<String> {
    window
        .lines()
        .filter(|line| line.contains("'''"))
        .map(strip_markup)
        .find(|line| !line.is_empty())
}
