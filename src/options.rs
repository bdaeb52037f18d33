//! Configuration options for chapter extraction.
//!
//! The `Options` struct names the wiki conventions the parser relies on:
//! which template is the chapter infobox, where the rendered content lives,
//! and how raw infobox parameters are labelled.

/// Raw infobox parameter names and the display labels they map to.
pub const DEFAULT_FIELD_LABELS: &[(&str, &str)] = &[
    ("game", "Game"),
    ("objective", "Objective"),
    ("number of allowed units", "Units Allowed"),
    ("units gained", "Units Gained"),
    ("boss name", "Boss"),
];

/// Configuration options for chapter extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the conventions of the Fire Emblem wiki.
///
/// # Example
///
/// ```rust
/// use wikichapter::Options;
///
/// let options = Options {
///     infobox_template: "Chapterinfobox2".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.content_selector, "div.mw-parser-output");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Name of the wikitext template holding chapter metadata.
    ///
    /// Matched case-sensitively as `{{<name>`.
    ///
    /// Default: `"Chapterinfobox"`
    pub infobox_template: String,

    /// CSS selector for the rendered page content container.
    ///
    /// When nothing matches, the document `<body>` is searched instead.
    ///
    /// Default: `"div.mw-parser-output"`
    pub content_selector: String,

    /// Raw (lower-cased) infobox parameter name to display label.
    ///
    /// Parameters missing from this table are title-cased, with underscores
    /// replaced by spaces.
    ///
    /// Default: [`DEFAULT_FIELD_LABELS`]
    pub field_labels: Vec<(String, String)>,

    /// HTML heading tags that start a new section.
    ///
    /// Default: `["h2", "h3", "h4"]`
    pub heading_levels: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            infobox_template: "Chapterinfobox".to_string(),
            content_selector: "div.mw-parser-output".to_string(),
            field_labels: DEFAULT_FIELD_LABELS
                .iter()
                .map(|(raw, label)| ((*raw).to_string(), (*label).to_string()))
                .collect(),
            heading_levels: ["h2", "h3", "h4"].iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl Options {
    /// Look up the display label configured for a raw parameter name.
    #[must_use]
    pub fn label_for(&self, raw_name: &str) -> Option<&str> {
        self.field_labels
            .iter()
            .find(|(raw, _)| raw == raw_name)
            .map(|(_, label)| label.as_str())
    }

    pub(crate) fn is_heading(&self, tag: &str) -> bool {
        self.heading_levels.iter().any(|h| h == tag)
    }
}
