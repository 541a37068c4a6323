//! PDF rendering modules for imposition
//!
//! This module handles all PDF-specific operations:
//! - Reading, trimming and writing page bounding boxes
//! - Creating Form XObjects from the card pages
//! - Building the imposed output sheets
//! - Deep copying PDF objects

mod page;
mod page_box;
mod xobject;

pub use page::{placement_command, render_side};
pub use page_box::{PageBox, inherited_attribute, read_page_box, write_page_box};
pub use xobject::{copy_object_deep, create_page_xobject};
