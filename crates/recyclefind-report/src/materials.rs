//! Matching of free-text material labels against the reference
//! `recycling.Materials` table.

use std::collections::{BTreeMap, BTreeSet};

/// One row of the reference materials table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceMaterial {
    pub category: &'static str,
    pub description: &'static str,
    /// kg CO2e saved per kg recycled.
    pub co2_savings: f64,
}

const fn material(category: &'static str, description: &'static str, co2_savings: f64) -> ReferenceMaterial {
    ReferenceMaterial {
        category,
        description,
        co2_savings,
    }
}

/// Contents of `recycling.Materials`.
pub const EXISTING_MATERIALS: &[ReferenceMaterial] = &[
    material("paper", "Corrugated Containers", 5.58),
    material("paper", "Magazines/third-class mail", 8.57),
    material("paper", "Newspaper", 4.68),
    material("paper", "Office Paper", 7.95),
    material("paper", "Phonebooks", 6.17),
    material("paper", "Textbooks", 9.02),
    material("paper", "Mixed Paper (general)", 6.07),
    material("paper", "Mixed Paper (primarily)", 6.00),
    material("paper", "Mixed Paper (primarily from Food Waste)", 3.66),
    material("organic", "Food Waste (non-meat)", 0.76),
    material("organic", "Food Waste (meat only)", 15.1),
    material("organic", "Beef", 30.9),
    material("organic", "Poultry", 2.45),
    material("organic", "Grains", 0.62),
    material("organic", "Bread", 0.66),
    material("organic", "Fruits and Vegetables", 0.44),
    material("organic", "Dairy Products", 1.75),
    material("plastic", "HDPE", 1.42),
    material("plastic", "LDPE", 1.80),
    material("plastic", "PET", 2.17),
    material("plastic", "LLDPE", 1.58),
    material("plastic", "PP", 1.00),
    material("plastic", "PS", 2.50),
    material("plastic", "PVC", 1.93),
    material("plastic", "Mixed Plastics", 1.87),
    material("plastic", "PLA", 2.45),
    material("electronics", "Desktop CPUs", 20.80),
    material("electronics", "Portable Electronic Devices", 29.83),
    material("electronics", "Flat-Panel Displays", 24.19),
    material("electronics", "Electronic Peripherals", 10.32),
    material("electronics", "Hard-Copy Devices", 7.65),
    material("electronics", "Mixed Electronics", 20.79),
    material("metal", "Aluminum Cans", 4.80),
    material("metal", "Aluminum Ingot", 7.48),
    material("metal", "Steel Cans", 3.03),
    material("metal", "Copper Wire", 6.72),
    material("metal", "Mixed Metals", 3.65),
    material("glass", "Glass", 0.53),
    material("construction", "Asphalt Concrete", 0.19),
    material("construction", "Asphalt Shingles", 0.19),
    material("construction", "Carpet", 3.68),
    material("construction", "Clay Bricks", 0.27),
    material("construction", "Dimensional Lumber", 2.11),
    material("construction", "Drywall", 0.00),
    material("construction", "Fiberglass Insulation", 0.38),
    material("construction", "Medium-density Fiberboard", 3.05),
    material("construction", "Structural Steel", 1.67),
    material("construction", "Vinyl Flooring", 0.58),
    material("construction", "Wood Flooring", 4.11),
    material("tires", "Tires", 4.30),
];

/// Keywords that place a free-text label into a category, checked in order.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "metal",
        &[
            "iron", "steel", "aluminum", "copper", "scrap", "metal", "tin", "brass", "bronze",
            "zinc", "lead", "ferrous", "non-ferrous", "cans", "wire", "ingot",
        ],
    ),
    (
        "plastic",
        &[
            "plastic", "pp", "ps", "pet", "pvc", "hdpe", "ldpe", "lldpe", "polypropylene",
            "polystyrene", "polyethylene", "polyvinyl", "bottles", "containers", "packaging",
            "pla", "bioplastic",
        ],
    ),
    (
        "textile",
        &[
            "clothing", "clothes", "fabric", "textile", "garments", "apparel", "fashion", "wool",
            "cotton", "polyester", "nylon", "linen", "denim", "silk", "leather",
        ],
    ),
    (
        "paper",
        &[
            "paper", "cardboard", "carton", "newspaper", "magazine", "mail", "book", "phonebook",
            "office paper", "printing paper", "corrugated", "packaging", "box", "document",
            "catalog", "envelope", "receipt",
        ],
    ),
    (
        "glass",
        &[
            "glass", "bottle", "jar", "window", "mirror", "container", "glassware", "windscreen",
            "windshield", "pane", "cullet",
        ],
    ),
];

/// A matched `(category, description)` pair from [`EXISTING_MATERIALS`].
pub type MaterialMatch = (&'static str, &'static str);

/// Whether `keyword` occurs in `label` as a whole word (or word sequence),
/// so that short keywords like `pp` or `tin` do not fire inside `paper` or
/// `printing`.
fn mentions(label: &str, keyword: &str) -> bool {
    let words: Vec<&str> = label
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|w| !w.is_empty())
        .collect();
    let wanted: Vec<&str> = keyword.split(' ').collect();
    words.windows(wanted.len()).any(|w| w == wanted.as_slice())
}

fn category_of(label: &str) -> Option<&'static str> {
    let label = label.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| mentions(&label, k)))
        .map(|(category, _)| *category)
}

/// Finds the reference material for `label`: an exact description match
/// first, then the category's catch-all row.
fn best_match(label: &str, category: &str) -> Option<MaterialMatch> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    if let Some(m) = EXISTING_MATERIALS
        .iter()
        .find(|m| m.description.eq_ignore_ascii_case(label))
    {
        return Some((m.category, m.description));
    }
    if !EXISTING_MATERIALS.iter().any(|m| m.category == category) {
        return None;
    }
    let lower = label.to_lowercase();
    match category {
        "metal" if lower == "iron" || lower == "steel" => Some(("metal", "Mixed Metals")),
        "plastic" => Some(("plastic", "Mixed Plastics")),
        "paper" => Some(("paper", "Mixed Paper (general)")),
        _ => None,
    }
}

/// Matches a business's material labels and website keywords against the
/// reference table. Labels are categorised by keyword; website keywords
/// already carry their category.
#[must_use]
pub fn match_materials(
    materials: &[String],
    website_materials: &BTreeMap<String, Vec<String>>,
) -> BTreeSet<MaterialMatch> {
    let from_labels = materials
        .iter()
        .filter_map(|label| best_match(label, category_of(label)?));
    let from_website = website_materials.iter().flat_map(|(category, keywords)| {
        keywords
            .iter()
            .filter_map(move |keyword| best_match(keyword, category))
    });
    from_labels.chain(from_website).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn category_labels_map_to_catch_all_rows() {
        let matched = match_materials(&labels(&["plastic", "paper", "glass"]), &BTreeMap::new());
        assert_eq!(
            matched.into_iter().collect::<Vec<_>>(),
            vec![
                ("glass", "Glass"),
                ("paper", "Mixed Paper (general)"),
                ("plastic", "Mixed Plastics"),
            ]
        );
    }

    #[test]
    fn short_keywords_only_match_whole_words() {
        assert_eq!(category_of("paper"), Some("paper"));
        assert_eq!(category_of("printing paper"), Some("paper"));
        assert_eq!(category_of("PP"), Some("plastic"));
        assert_eq!(category_of("scrap metal"), Some("metal"));
        assert_eq!(category_of("non-ferrous"), Some("metal"));
        assert_eq!(category_of("electronics"), None);
    }

    #[test]
    fn exact_descriptions_win_over_catch_alls() {
        let matched = match_materials(&labels(&["HDPE", "copper wire"]), &BTreeMap::new());
        assert!(matched.contains(&("plastic", "HDPE")));
        assert!(matched.contains(&("metal", "Copper Wire")));
        assert!(!matched.contains(&("plastic", "Mixed Plastics")));
    }

    #[test]
    fn metal_catch_all_needs_iron_or_steel() {
        let matched = match_materials(&labels(&["metal", "steel"]), &BTreeMap::new());
        assert_eq!(
            matched.into_iter().collect::<Vec<_>>(),
            vec![("metal", "Mixed Metals")]
        );
    }

    #[test]
    fn website_keywords_use_their_category_and_dedupe() {
        let mut website = BTreeMap::new();
        website.insert("plastic".to_string(), labels(&["PET", "HDPE", "plastic"]));
        website.insert("textile".to_string(), labels(&["clothing"]));
        website.insert("electronics".to_string(), labels(&["e-waste"]));

        let matched = match_materials(&labels(&["plastic"]), &website);
        assert_eq!(
            matched.into_iter().collect::<Vec<_>>(),
            vec![
                ("plastic", "HDPE"),
                ("plastic", "Mixed Plastics"),
                ("plastic", "PET"),
            ]
        );
    }

    #[test]
    fn blank_labels_are_ignored() {
        assert!(match_materials(&labels(&["", "  "]), &BTreeMap::new()).is_empty());
    }
}
