//! Section extraction from wikitext.
//!
//! Headings (`== Title ==`, any depth of two or more) split the page into
//! sections. Text before the first heading is lead material and is not part
//! of any section.

use tracing::debug;

use crate::patterns::HEADING;
use crate::result::Section;
use crate::wikitext::braces::match_template;
use crate::wikitext::strip::strip_markup;

/// Split page wikitext into titled sections of readable lines.
///
/// Blank lines and lines that are a single standalone template are skipped;
/// every other line is stripped of markup and kept if any text remains.
/// Sections left without lines are omitted.
#[must_use]
pub fn extract_sections(wikitext: &str) -> Vec<Section> {
    let headings: Vec<_> = HEADING.captures_iter(wikitext).collect();

    let mut sections = Vec::new();
    for (index, caps) in headings.iter().enumerate() {
        let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = headings
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(wikitext.len(), |m| m.start());

        let content = section_lines(&wikitext[whole.end()..end]);
        if content.is_empty() {
            debug!(title = title.as_str(), "dropping empty section");
            continue;
        }
        sections.push(Section {
            title: title.as_str().to_string(),
            content,
        });
    }

    debug!(headings = headings.len(), sections = sections.len(), "parsed wikitext sections");
    sections
}

/// Readable lines of one section body.
fn section_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_standalone_template(line))
        .map(strip_markup)
        .filter(|line| !line.is_empty())
        .collect()
}

/// True when the whole (trimmed) line is one `{{...}}` invocation.
fn is_standalone_template(line: &str) -> bool {
    match_template(line, 0).is_some_and(|span| span.end == line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_section_and_empty_trailer() {
        let text = "== Strategy ==\nDo this.\n\n* Step one\n* Step two\n== Enemies ==\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Strategy");
        assert_eq!(sections[0].content, vec!["Do this.", "Step one", "Step two"]);
    }

    #[test]
    fn test_no_headings() {
        assert!(extract_sections("Just a lead paragraph.\n{{Navbox}}").is_empty());
    }

    #[test]
    fn test_lead_text_is_discarded() {
        let text = "Lead text.\n==Story==\nLyn wakes up.";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, vec!["Lyn wakes up."]);
    }

    #[test]
    fn test_heading_depths() {
        let text = "==Map==\nA plain.\n===Reinforcements===\nTurn 3: two brigands.\n====Notes====\nNone.";
        let titles: Vec<String> = extract_sections(text).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Map", "Reinforcements", "Notes"]);
    }

    #[test]
    fn test_standalone_templates_skipped() {
        let text = "== Enemies ==\n{{EnemyTable|Brigand|Lv 1}}\n  {{Clear}}  \nBrigands attack from the north.";
        let sections = extract_sections(text);
        assert_eq!(sections[0].content, vec!["Brigands attack from the north."]);
    }

    #[test]
    fn test_line_mixing_templates_and_text_is_kept() {
        let text = "== Strategy ==\n{{Unit|Lyn}} should attack {{Unit|Batta}}\n{{A}}{{B}}\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, vec!["should attack"]);
    }

    #[test]
    fn test_section_with_only_markup_is_dropped() {
        let text = "== Gallery ==\n[[File:Map.png|thumb]]\n<!-- todo -->\n== Trivia ==\nThe [[Lyn|heroine]] is from Sacae.";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Trivia");
        assert_eq!(sections[0].content, vec!["The heroine is from Sacae."]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "== Strategy ==\r\nMove Lyn first.\r\n";
        let sections = extract_sections(text);
        assert_eq!(sections[0].title, "Strategy");
        assert_eq!(sections[0].content, vec!["Move Lyn first."]);
    }
}
