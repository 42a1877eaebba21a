use recyclefind_core::BusinessRecord;

use crate::format::{CardFormat, HtmlCards};
use crate::region::DisplayRegion;

/// Replaces the region's content with one HTML card per record, in order.
///
/// An empty slice leaves the region empty.
pub fn render(records: &[BusinessRecord], region: &impl DisplayRegion) {
    render_with(records, region, &HtmlCards);
}

/// [`render`] with a caller-chosen card format.
pub fn render_with(
    records: &[BusinessRecord],
    region: &impl DisplayRegion,
    format: &impl CardFormat,
) {
    region.clear();
    for record in records {
        region.append(&format.card(record));
    }
}
