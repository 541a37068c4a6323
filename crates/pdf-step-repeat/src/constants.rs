//! Shared constants for step-and-repeat imposition
//!
//! This module centralizes the fixed numbers the planner works with:
//! unit conversion, default margins, trim candidates and the duplex
//! correction applied to the back side.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Fallback page size when a source page carries no MediaBox (US Letter)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);

// =============================================================================
// Planning
// =============================================================================

/// Trim amounts tried for every run, in millimeters per edge
pub const DEFAULT_TRIM_CANDIDATES_MM: [f32; 2] = [0.0, 2.0];

/// Default minimum print margin on each axis (mm)
pub const DEFAULT_MARGIN_MM: f32 = 5.0;

/// Back side correction for duplex misregistration (mm).
/// Positive Y moves the back up relative to the front.
pub const DEFAULT_BACK_OFFSET_X_MM: f32 = -2.5;
pub const DEFAULT_BACK_OFFSET_Y_MM: f32 = 0.0;

/// Smallest card edge accepted before and after trimming (mm)
pub const MIN_CARD_SIZE_MM: f32 = 1.0;

/// Slack allowed when checking final margins against the configured minimum (points)
pub const MARGIN_TOLERANCE_PT: f32 = 0.01;

// =============================================================================
// Output
// =============================================================================

/// Resource name of the card form drawn in every grid cell
pub const CARD_XOBJECT_NAME: &str = "Card";

/// Suffix appended to the input file stem when no output path is given
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_PRINT";
