//! Output document assembly: one sheet page per card side

use super::PreparedImposition;
use crate::layout::{SheetSide, side_placements};
use crate::render::{create_page_xobject, read_page_box, render_side};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Build the imposed document from prepared (already trimmed) card pages.
pub(crate) fn build_output(source: &Document, prepared: &PreparedImposition) -> Result<Document> {
    let plan = &prepared.plan;

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();
    let mut object_cache: HashMap<ObjectId, ObjectId> = HashMap::new();

    for side in SheetSide::BOTH {
        let source_page = prepared.page_for(side);
        let page_box = read_page_box(source, source_page)?;
        let card_xobject =
            create_page_xobject(&mut output, source, source_page, &page_box, &mut object_cache)?;

        let placements = side_placements(plan, side);
        let page_id = render_side(
            &mut output,
            card_xobject,
            &placements,
            plan.sheet,
            pages_tree_id,
        )?;
        log::debug!("Rendered {:?} side with {} cards", side, placements.len());
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}
