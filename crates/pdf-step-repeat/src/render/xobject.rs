//! XObject creation for imposition
//!
//! This module turns a source card page into a Form XObject that is
//! drawn once per grid cell on the output sheet.

use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::page_box::{PageBox, inherited_attribute};

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// The form's `/BBox` is the page box, so anything outside a trimmed box is
/// clipped. Its `/Matrix` moves the box's lower-left corner to the form
/// origin, so callers can always treat the card as spanning
/// `[0, width] x [0, height]`.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `page_box` - Box of the source page (after any trimming)
/// * `cache` - Source to output object ID map, shared across calls so that
///   resources used by both sides are copied only once
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    page_box: &PageBox,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let content_data = get_page_content(source, page_dict)?;
    let origin = page_box.lower_left();

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("FormType", Object::Integer(1));
    xobject_dict.set("BBox", page_box.to_rectangle());
    xobject_dict.set(
        "Matrix",
        Object::Array(vec![
            Object::Integer(1),
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(1),
            Object::Real(-origin.x),
            Object::Real(-origin.y),
        ]),
    );

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank card
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            // Some writers store the content array indirectly
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            obj => stream_bytes(obj),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            result.extend_from_slice(&stream_bytes(doc.get_object(*id)?)?);
            result.push(b'\n');
        }
    }

    Ok(result)
}

/// Decoded bytes of a stream object; empty for anything else.
///
/// The form that receives these bytes carries no `/Filter`, so a stream
/// that cannot be decoded is an error rather than copied as-is.
fn stream_bytes(obj: &Object) -> Result<Vec<u8>> {
    let Ok(stream) = obj.as_stream() else {
        return Ok(Vec::new());
    };

    if stream.dict.has(b"Filter") {
        Ok(stream.decompressed_content()?)
    } else {
        Ok(stream.content.clone())
    }
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// The output ID is reserved before the referenced object is copied, so
/// reference cycles terminate.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let copied = copy_object_deep(output, source, source.get_object(*id)?, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let dict = copy_dictionary(output, source, &stream.dict, cache)?;
            Ok(Object::Stream(
                Stream::new(dict, stream.content.clone())
                    .with_compression(stream.allows_compression),
            ))
        }
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}
