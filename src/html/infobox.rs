//! Infobox extraction from rendered HTML.
//!
//! MediaWiki "portable infoboxes" render as an `<aside>`:
//!
//! ```html
//! <aside class="portable-infobox">
//!   <h2 class="pi-title">Prologue</h2>
//!   <figure><img src="map.png" alt="Map"></figure>
//!   <section class="pi-group">
//!     <h2 class="pi-header">Battle</h2>
//!     <div class="pi-data">
//!       <h3 class="pi-data-label">Objective</h3>
//!       <div class="pi-data-value">Rout the enemy</div>
//!     </div>
//!   </section>
//! </aside>
//! ```

use tracing::debug;

use crate::dom::{self, Selection};
use crate::result::{Field, Infobox, InfoboxImage};

const TITLE_SELECTORS: &[&str] = &[".pi-title", "h2", "h1"];
const GROUP_HEADER_SELECTORS: &[&str] = &[".pi-header", "h2, h3"];

/// Extract the first infobox `<aside>` within `scope`.
#[must_use]
pub fn extract_infobox(scope: &Selection) -> Infobox {
    let aside = scope.select_single("aside");
    if !aside.exists() {
        debug!("no infobox aside found");
        return Infobox::default();
    }

    let title = dom::first_match(&aside, TITLE_SELECTORS)
        .map(|t| dom::collapsed_text(&t))
        .filter(|t| !t.is_empty());

    let fields: Vec<Field> = aside.select(".pi-data").iter().map(|data| field(&data)).collect();

    debug!(fields = fields.len(), title = ?title, "parsed html infobox");
    Infobox {
        title,
        image: image(&aside),
        fields,
    }
}

fn field(data: &Selection) -> Field {
    let label = data.select_single(".pi-data-label");
    let value = data.select_single(".pi-data-value");

    Field {
        label: if label.exists() { dom::collapsed_text(&label) } else { String::new() },
        value: dom::collapsed_text(if value.exists() { &value } else { data }),
        group: group_title(data),
    }
}

/// Header text of the nearest enclosing `.pi-group`.
fn group_title(data: &Selection) -> Option<String> {
    let group = dom::closest_ancestor_with_class(data, "pi-group")?;
    let header = dom::first_match(&group, GROUP_HEADER_SELECTORS)?;
    Some(dom::collapsed_text(&header))
}

/// First image in the infobox. Lazy-loaded images keep the real URL in
/// `data-src` and a `data:` placeholder in `src`.
fn image(aside: &Selection) -> Option<InfoboxImage> {
    let img = aside.select_single("img");
    if !img.exists() {
        return None;
    }

    let src = match dom::get_attribute(&img, "src") {
        Some(src) if src.starts_with("data:") => dom::get_attribute(&img, "data-src").or(Some(src)),
        src => src,
    };
    Some(InfoboxImage {
        src,
        alt: dom::get_attribute(&img, "alt"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASIDE: &str = r#"
        <div class="mw-parser-output">
            <aside class="portable-infobox">
                <h2 class="pi-item pi-title">Prologue</h2>
                <figure><img src="https://static.example/map.png" alt="Prologue map"></figure>
                <div class="pi-item pi-data">
                    <h3 class="pi-data-label">Game</h3>
                    <div class="pi-data-value">Blazing Blade</div>
                </div>
                <section class="pi-item pi-group">
                    <h2 class="pi-item pi-header">Battle</h2>
                    <div class="pi-item pi-data">
                        <h3 class="pi-data-label">Objective</h3>
                        <div class="pi-data-value">Rout the   enemy</div>
                    </div>
                    <div class="pi-item pi-data">
                        <h3 class="pi-data-label">Boss</h3>
                        <div class="pi-data-value">Batta<br>the Beast</div>
                    </div>
                </section>
            </aside>
        </div>
    "#;

    #[test]
    fn test_title_image_and_fields() {
        let doc = dom::parse(ASIDE);
        let infobox = extract_infobox(&doc.select("body"));

        assert_eq!(infobox.title.as_deref(), Some("Prologue"));
        assert_eq!(
            infobox.image,
            Some(InfoboxImage {
                src: Some("https://static.example/map.png".to_string()),
                alt: Some("Prologue map".to_string()),
            })
        );
        assert_eq!(infobox.fields.len(), 3);
        assert_eq!(infobox.fields[0], Field::new("Game", "Blazing Blade"));
        assert_eq!(
            infobox.fields[1],
            Field {
                label: "Objective".to_string(),
                value: "Rout the enemy".to_string(),
                group: Some("Battle".to_string()),
            }
        );
        assert_eq!(infobox.fields[2].value, "Batta the Beast");
    }

    #[test]
    fn test_no_aside() {
        let doc = dom::parse("<p>No infobox here</p>");
        assert!(extract_infobox(&doc.select("body")).is_empty());
    }

    #[test]
    fn test_title_falls_back_to_heading() {
        let doc = dom::parse("<aside><h1>Chapter 1</h1></aside>");
        let infobox = extract_infobox(&doc.select("body"));
        assert_eq!(infobox.title.as_deref(), Some("Chapter 1"));
        assert!(infobox.image.is_none());
    }

    #[test]
    fn test_field_without_label_or_value_element() {
        let doc = dom::parse(r#"<aside><div class="pi-data">Loose text</div></aside>"#);
        let infobox = extract_infobox(&doc.select("body"));
        assert_eq!(infobox.fields, vec![Field::new("", "Loose text")]);
    }

    #[test]
    fn test_lazy_loaded_image() {
        let doc = dom::parse(
            r#"<aside><img src="data:image/gif;base64,R0lGOD" data-src="https://static.example/real.png"></aside>"#,
        );
        let image = extract_infobox(&doc.select("body")).image.unwrap();
        assert_eq!(image.src.as_deref(), Some("https://static.example/real.png"));
        assert_eq!(image.alt, None);
    }
}
