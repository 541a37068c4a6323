//! Page bounding box access
//!
//! Reads and writes a page's visible box (MediaBox clipped by CropBox),
//! following `/Parent` inheritance the way PDF viewers do.

use crate::constants::{DEFAULT_PAGE_DIMENSIONS, mm_to_pt};
use crate::layout::{Dimension, Point};
use crate::types::{Result, StepRepeatError};
use lopdf::{Document, Object, ObjectId};

/// Guard against malformed page trees with `/Parent` cycles
const MAX_INHERITANCE_DEPTH: usize = 32;

/// A page bounding box, lower-left and upper-right corners in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBox {
    pub llx: f32,
    pub lly: f32,
    pub urx: f32,
    pub ury: f32,
}

impl PageBox {
    pub fn new(llx: f32, lly: f32, urx: f32, ury: f32) -> Self {
        Self { llx, lly, urx, ury }
    }

    /// Box of the given size anchored at the origin
    pub fn from_dimension(dimension: Dimension) -> Self {
        Self::new(0.0, 0.0, dimension.width, dimension.height)
    }

    pub fn width(&self) -> f32 {
        self.urx - self.llx
    }

    pub fn height(&self) -> f32 {
        self.ury - self.lly
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::new(self.width(), self.height())
    }

    pub fn lower_left(&self) -> Point {
        Point::new(self.llx, self.lly)
    }

    /// Shrink the box by `trim_mm` on all four edges.
    ///
    /// Fails with `OverTrimmed` when the result would be empty.
    pub fn trimmed(&self, trim_mm: f32) -> Result<Self> {
        if trim_mm <= 0.0 {
            return Ok(*self);
        }

        let trim = mm_to_pt(trim_mm);
        let trimmed = Self::new(
            self.llx + trim,
            self.lly + trim,
            self.urx - trim,
            self.ury - trim,
        );

        if trimmed.urx <= trimmed.llx || trimmed.ury <= trimmed.lly {
            return Err(StepRepeatError::OverTrimmed { trim_mm });
        }
        Ok(trimmed)
    }

    /// Parse a `[llx lly urx ury]` rectangle, normalizing swapped corners
    pub fn from_rectangle(rect: &[Object]) -> Option<Self> {
        let [a, b, c, d] = rect else {
            return None;
        };
        let (x0, y0, x1, y1) = (
            extract_number(a)?,
            extract_number(b)?,
            extract_number(c)?,
            extract_number(d)?,
        );
        Some(Self::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)))
    }

    /// Overlap of two boxes; `None` when they do not overlap
    pub fn intersection(&self, other: &PageBox) -> Option<Self> {
        let overlap = Self::new(
            self.llx.max(other.llx),
            self.lly.max(other.lly),
            self.urx.min(other.urx),
            self.ury.min(other.ury),
        );
        (overlap.urx > overlap.llx && overlap.ury > overlap.lly).then_some(overlap)
    }

    pub fn to_rectangle(&self) -> Object {
        Object::Array(vec![
            Object::Real(self.llx),
            Object::Real(self.lly),
            Object::Real(self.urx),
            Object::Real(self.ury),
        ])
    }
}

// =============================================================================
// Document Access
// =============================================================================

/// Look up a page attribute, walking up the page tree for inheritable keys.
///
/// Indirect values are resolved.
pub fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut node = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_INHERITANCE_DEPTH {
        if let Ok(value) = node.get(key) {
            let (_, resolved) = doc.dereference(value)?;
            return Ok(Some(resolved));
        }
        match node.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => node = doc.get_dictionary(parent_id)?,
            Err(_) => return Ok(None),
        }
    }

    Ok(None)
}

/// Read an inheritable rectangle attribute such as `/MediaBox`
fn read_rectangle(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<PageBox>> {
    Ok(inherited_attribute(doc, page_id, key)?
        .and_then(|obj| obj.as_array().ok())
        .and_then(|rect| PageBox::from_rectangle(rect)))
}

/// Read the visible box of a page: its MediaBox clipped by its CropBox.
///
/// Pages without a usable MediaBox fall back to US Letter. A CropBox that
/// misses the MediaBox entirely is ignored.
pub fn read_page_box(doc: &Document, page_id: ObjectId) -> Result<PageBox> {
    let media_box = read_rectangle(doc, page_id, b"MediaBox")?.unwrap_or_else(|| {
        log::warn!("Page {page_id:?} has no usable MediaBox, assuming US Letter");
        PageBox::from_dimension(Dimension::new(
            DEFAULT_PAGE_DIMENSIONS.0,
            DEFAULT_PAGE_DIMENSIONS.1,
        ))
    });

    let Some(crop_box) = read_rectangle(doc, page_id, b"CropBox")? else {
        return Ok(media_box);
    };

    Ok(media_box.intersection(&crop_box).unwrap_or_else(|| {
        log::warn!("Page {page_id:?} CropBox lies outside its MediaBox, ignoring it");
        media_box
    }))
}

/// Store the box directly on the page as both MediaBox and CropBox,
/// overriding any inherited ones
pub fn write_page_box(doc: &mut Document, page_id: ObjectId, page_box: PageBox) -> Result<()> {
    let page = doc.get_dictionary_mut(page_id)?;
    page.set("MediaBox", page_box.to_rectangle());
    page.set("CropBox", page_box.to_rectangle());
    Ok(())
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
