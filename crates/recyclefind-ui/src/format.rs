//! Markup for notices and business cards.
//!
//! [`HtmlCards`] produces the page fragment; [`TextCards`] produces the
//! terminal listing. Both share the same presence rules for optional
//! fields, taken from [`BusinessRecord`]'s accessors.

use recyclefind_core::BusinessRecord;

/// Which kind of status line a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Loading,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Loading => "loading",
            NoticeKind::Error => "error",
        }
    }
}

/// Turns notices and records into region content.
pub trait CardFormat {
    fn notice(&self, kind: NoticeKind, text: &str) -> String;
    fn card(&self, record: &BusinessRecord) -> String;
}

/// HTML fragment output.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlCards;

/// Plain-text output for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCards;

/// Escapes text for use in element content and double- or single-quoted
/// attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl CardFormat for HtmlCards {
    fn notice(&self, kind: NoticeKind, text: &str) -> String {
        format!("<p class=\"{}\">{}</p>", kind.class(), escape_html(text))
    }

    fn card(&self, record: &BusinessRecord) -> String {
        let mut lines = vec![
            "<div class=\"business-card\">".to_string(),
            format!(
                "<div class=\"business-name\">{}</div>",
                escape_html(&record.name)
            ),
            format!("<div>{}</div>", escape_html(&record.address)),
        ];
        if let Some(phone) = record.phone() {
            lines.push(format!("<div>\u{1f4de} {}</div>", escape_html(phone)));
        }
        if let Some(website) = record.website() {
            lines.push(format!(
                "<div>\u{1f310} <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Website</a></div>",
                escape_html(website)
            ));
        }
        if let Some(rating) = record.rating() {
            lines.push(format!("<div>\u{2b50} {rating}</div>"));
        }
        if !record.materials.is_empty() {
            lines.push(format!(
                "<div>\u{267b}\u{fe0f} Materials: {}</div>",
                escape_html(&record.materials.join(", "))
            ));
        }
        lines.push("</div>\n".to_string());
        lines.join("\n")
    }
}

const RULE_WIDTH: usize = 50;

impl CardFormat for TextCards {
    fn notice(&self, _kind: NoticeKind, text: &str) -> String {
        format!("{text}\n")
    }

    fn card(&self, record: &BusinessRecord) -> String {
        let mut lines = vec![
            format!("Name: {}", record.name),
            format!("Address: {}", record.address),
        ];
        if let Some(coords) = record.coordinates {
            lines.push(format!("Coordinates: {}, {}", coords.lat, coords.lng));
        }
        if let Some(phone) = record.phone() {
            lines.push(format!("Phone: {phone}"));
        }
        if let Some(website) = record.website() {
            lines.push(format!("Website: {website}"));
        }
        if let Some(rating) = record.rating() {
            lines.push(format!("Rating: {rating}"));
        }
        if !record.materials.is_empty() {
            lines.push(format!("Materials: {}", record.materials.join(", ")));
        }
        if !record.opening_hours.is_empty() {
            lines.push("Opening Hours:".to_string());
            lines.extend(record.opening_hours.iter().map(|h| format!("  {h}")));
        }
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(String::new());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> BusinessRecord {
        let mut record = BusinessRecord::new("Acme Recycling", "123 Main St");
        record.materials = vec!["plastic".to_string(), "glass".to_string()];
        record
    }

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("No results"), "No results");
    }

    #[test]
    fn html_notice_wraps_text_in_classed_paragraph() {
        assert_eq!(
            HtmlCards.notice(NoticeKind::Error, "No results"),
            "<p class=\"error\">No results</p>"
        );
        assert_eq!(
            HtmlCards.notice(NoticeKind::Loading, "wait"),
            "<p class=\"loading\">wait</p>"
        );
    }

    #[test]
    fn html_card_with_required_fields_and_materials_only() {
        let card = HtmlCards.card(&acme());
        assert!(card.starts_with("<div class=\"business-card\">"));
        assert!(card.contains("<div class=\"business-name\">Acme Recycling</div>"));
        assert!(card.contains("<div>123 Main St</div>"));
        assert!(card.contains("Materials: plastic, glass"));
        assert!(!card.contains('\u{1f4de}'), "unexpected phone line: {card}");
        assert!(!card.contains("<a href"), "unexpected website line: {card}");
        assert!(!card.contains('\u{2b50}'), "unexpected rating line: {card}");
    }

    #[test]
    fn html_card_with_every_optional_field() {
        let mut record = acme();
        record.phone = Some("0191 000 0000".to_string());
        record.website = Some("https://acme.example/?a=1&b=2".to_string());
        record.rating = Some(4.5);

        let card = HtmlCards.card(&record);
        assert!(card.contains("<div>\u{1f4de} 0191 000 0000</div>"));
        assert!(card.contains(
            "<a href=\"https://acme.example/?a=1&amp;b=2\" target=\"_blank\" rel=\"noopener noreferrer\">Website</a>"
        ));
        assert!(card.contains("<div>\u{2b50} 4.5</div>"));
    }

    #[test]
    fn html_card_shows_zero_rating() {
        let mut record = acme();
        record.rating = Some(0.0);
        assert!(HtmlCards.card(&record).contains("<div>\u{2b50} 0</div>"));
    }

    #[test]
    fn html_card_omits_materials_line_when_empty() {
        let record = BusinessRecord::new("Depot", "1 Yard Rd");
        assert!(!HtmlCards.card(&record).contains("Materials"));
    }

    #[test]
    fn html_card_escapes_record_text() {
        let record = BusinessRecord::new("<script>alert(1)</script>", "1 Yard Rd");
        let card = HtmlCards.card(&record);
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
    }

    #[test]
    fn text_card_lists_present_fields() {
        let mut record = acme();
        record.phone = Some("123-456-7890".to_string());
        record.opening_hours = vec![
            "Monday: 9:00 AM - 5:00 PM".to_string(),
            "Tuesday: 9:00 AM - 5:00 PM".to_string(),
        ];

        let card = TextCards.card(&record);
        assert!(card.starts_with("Name: Acme Recycling\nAddress: 123 Main St\n"));
        assert!(card.contains("Phone: 123-456-7890\n"));
        assert!(card.contains("Materials: plastic, glass\n"));
        assert!(card.contains("Opening Hours:\n  Monday: 9:00 AM - 5:00 PM\n"));
        assert!(!card.contains("Website:"));
        assert!(!card.contains("Rating:"));
        assert!(card.ends_with(&format!("{}\n", "-".repeat(RULE_WIDTH))));
    }

    #[test]
    fn text_card_includes_contact_lines_when_present() {
        let mut record = acme();
        record.coordinates = Some(recyclefind_core::Coordinates {
            lat: 54.97,
            lng: -1.61,
        });
        record.website = Some("https://acme.example".to_string());
        record.rating = Some(0.0);

        let card = TextCards.card(&record);
        assert!(card.contains("Coordinates: 54.97, -1.61\n"));
        assert!(card.contains("Website: https://acme.example\n"));
        assert!(card.contains("Rating: 0\n"));
        assert!(!card.contains("Opening Hours:"));
    }
}
