//! Cropping the card pages before placement

use crate::render::{PageBox, read_page_box, write_page_box};
use crate::types::*;
use lopdf::{Document, ObjectId};

/// Remove `trim_mm` from all four edges of a page's visible box.
///
/// A zero trim leaves the page untouched. Returns the resulting box.
pub fn crop_page_all_sides(
    doc: &mut Document,
    page_id: ObjectId,
    trim_mm: f32,
) -> Result<PageBox> {
    let page_box = read_page_box(doc, page_id)?;
    if trim_mm <= 0.0 {
        return Ok(page_box);
    }

    let trimmed = page_box.trimmed(trim_mm)?;
    write_page_box(doc, page_id, trimmed)?;
    log::debug!(
        "Cropped page {page_id:?} by {trim_mm} mm: {:.2} x {:.2} pt",
        trimmed.width(),
        trimmed.height()
    );
    Ok(trimmed)
}
