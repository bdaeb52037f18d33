#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use std::time::{Duration, Instant};

use wikichapter::{
    extract_tables_json, extract_tables_markdown, normalize, parse_from_html,
    parse_from_html_bytes, parse_from_wikitext, parse_from_wikitext_bytes, ChapterDocument, Error,
};

#[test]
fn empty_input_gives_empty_documents() {
    assert_eq!(parse_from_wikitext(""), ChapterDocument::default());
    assert_eq!(parse_from_html(""), ChapterDocument::default());
    assert!(extract_tables_json("").is_empty());
    assert!(extract_tables_markdown("").is_empty());
    assert!(normalize(&ChapterDocument::default()).chunks.is_empty());
}

#[test]
fn malformed_html_does_not_panic() {
    for html in [
        "<p>text<div>more",
        "<p><div></p></div>",
        "<div class=\"test id=broken>",
        "<aside><div class=\"pi-data\"><h3 class=\"pi-data-label\">Game",
        "<table><tr><th>A<td>b</table>",
        "<h2>Story<p>Unclosed heading",
    ] {
        let _ = parse_from_html(html);
        let _ = extract_tables_markdown(html);
    }
}

#[test]
fn unclosed_heading_html_still_yields_section_text() {
    let doc = parse_from_html("<html><body><h2>Story</h2><p>Lyn awakens");
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].content, vec!["Lyn awakens"]);
}

#[test]
fn unbalanced_braces_do_not_panic() {
    for text in [
        "{{",
        "}}",
        "{{Chapterinfobox",
        "{{Chapterinfobox\n|title={{Unit|Lyn}\n",
        "}}}}{{{{",
        "{{Chapterinfobox}}}}}",
        "== Story ==\n{{Quote|unclosed\nText after.",
    ] {
        let _ = parse_from_wikitext(text);
    }
}

#[test]
fn stray_closers_leave_a_balanced_infobox_intact() {
    let doc = parse_from_wikitext("{{Chapterinfobox\n|game=FE7\n}}}}\n'''Chapter''' text.");
    assert_eq!(doc.infobox.fields.len(), 1);
    assert_eq!(doc.infobox.fields[0].value, "FE7");
}

#[test]
fn multibyte_text_is_sliced_on_char_boundaries() {
    let text = "{{Chapterinfobox\n|title=序章 ～草原の少女～\n|game=封印の剣\n}}\n'''序章''' は最初の章です。\n== 攻略 ==\n* リンを砦へ。";
    let doc = parse_from_wikitext(text);
    assert_eq!(doc.infobox.title.as_deref(), Some("序章 ～草原の少女～"));
    assert_eq!(doc.summary.as_deref(), Some("序章 は最初の章です。"));
    assert_eq!(doc.sections[0].title, "攻略");
    assert_eq!(doc.sections[0].content, vec!["リンを砦へ。"]);
}

#[test]
fn deeply_nested_templates_complete_quickly() {
    let depth = 10_000;
    let text = format!(
        "{{{{Chapterinfobox\n|notes={}{}\n}}}}\n== Story ==\nText.",
        "{{Nest|".repeat(depth),
        "}}".repeat(depth)
    );

    let start = Instant::now();
    let doc = parse_from_wikitext(&text);
    let elapsed = start.elapsed();

    assert_eq!(doc.infobox.fields.len(), 1);
    assert_eq!(doc.sections[0].content, vec!["Text."]);
    assert!(elapsed < Duration::from_secs(10), "nested templates took {elapsed:?}");
}

#[test]
fn large_html_completes_in_reasonable_time() {
    let mut html = String::from("<html><body><div class=\"mw-parser-output\">");
    for i in 0..2_000 {
        html.push_str(&format!("<h2>Section {i}</h2><p>Paragraph {i}.</p><ul><li>Item {i}</li></ul>"));
    }
    html.push_str("</div></body></html>");

    let start = Instant::now();
    let doc = parse_from_html(&html);
    let elapsed = start.elapsed();

    assert_eq!(doc.sections.len(), 2_000);
    assert!(elapsed < Duration::from_secs(30), "large HTML parsing took {elapsed:?}");
}

#[test]
fn invalid_utf8_bytes_are_rejected() {
    let bytes = b"== Story ==\nLyn \xFF\xFE awakens.";
    match parse_from_wikitext_bytes(bytes) {
        Err(Error::InvalidUtf8 { valid_up_to }) => assert_eq!(valid_up_to, 16),
        other => panic!("expected InvalidUtf8, got {other:?}"),
    }
    assert!(matches!(
        parse_from_html_bytes(b"<p>\xC3</p>"),
        Err(Error::InvalidUtf8 { .. })
    ));
}

#[test]
fn byte_order_mark_is_ignored() {
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(b"{{Chapterinfobox\n|game=FE7\n}}");
    let doc = parse_from_wikitext_bytes(&bytes).expect("valid UTF-8");
    assert_eq!(doc.infobox.fields.len(), 1);
    assert_eq!(doc.infobox.fields[0].label, "Game");
}
