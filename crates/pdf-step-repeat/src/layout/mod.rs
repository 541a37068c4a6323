//! Layout calculation modules for step-and-repeat imposition
//!
//! This module handles all the geometry of the card grid:
//! - Scenario enumeration and selection (trim, rotation, grid size)
//! - Centering the chosen grid on the sheet
//! - Per-cell placement transforms for front and back

mod compose;
mod placement;
mod scenario;
mod types;

pub use compose::*;
pub use placement::*;
pub use scenario::*;
pub use types::*;
