//! Output sheet rendering
//!
//! One output page is allocated per sheet side; the card form is drawn
//! into every cell with that cell's placement transform.

use crate::constants::CARD_XOBJECT_NAME;
use crate::layout::{CellPlacement, Dimension, PlacementTransform};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Render one side of the sheet to the output document.
///
/// # Arguments
/// * `output` - The output document
/// * `card_xobject` - Form XObject holding the card for this side
/// * `placements` - One placement per grid cell
/// * `sheet` - Output page size in points
/// * `parent_pages_id` - The parent Pages object ID
pub fn render_side(
    output: &mut Document,
    card_xobject: ObjectId,
    placements: &[CellPlacement],
    sheet: Dimension,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet.width),
            Object::Real(sheet.height),
        ]),
    );

    let content: String = placements
        .iter()
        .map(|placement| placement_command(CARD_XOBJECT_NAME, &placement.transform))
        .collect();
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set(CARD_XOBJECT_NAME, Object::Reference(card_xobject));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Generate the PDF content stream command to draw a form under a transform.
pub fn placement_command(xobject_name: &str, transform: &PlacementTransform) -> String {
    let [a, b, c, d, e, f] = transform.matrix();
    format!("q {a} {b} {c} {d} {e} {f} cm /{xobject_name} Do Q\n")
}
