//! Final grid placement on the sheet
//!
//! The chosen scenario is re-evaluated with the real (possibly trimmed)
//! card size and centered on the whole sheet, not on the usable area.

use crate::constants::MARGIN_TOLERANCE_PT;
use crate::types::{Result, StepRepeatError};

use super::{AxisMargins, Dimension, ImpositionPlan, Point, Scenario};

/// Build the imposition plan for the selected scenario.
///
/// # Arguments
/// * `scenario` - The selected scenario
/// * `card` - Card size as read back from the page after trimming
/// * `sheet` - Sheet size in points
/// * `min_margin` - Minimum print margin per axis in points
/// * `back_offset` - Duplex correction for the back side in points
///
/// Fails with `InvariantViolation` when the centered grid would come closer
/// to the sheet edge than the minimum margin. Scenario enumeration already
/// guarantees the grid fits, so this only trips on an internal inconsistency.
pub fn compose_plan(
    scenario: &Scenario,
    card: Dimension,
    sheet: Dimension,
    min_margin: AxisMargins,
    back_offset: Point,
) -> Result<ImpositionPlan> {
    let cell = card.oriented(scenario.rotate);

    let grid_w = scenario.cols as f32 * cell.width;
    let grid_h = scenario.rows as f32 * cell.height;

    let margins = AxisMargins::new((sheet.width - grid_w) / 2.0, (sheet.height - grid_h) / 2.0);

    if margins.x < min_margin.x - MARGIN_TOLERANCE_PT
        || margins.y < min_margin.y - MARGIN_TOLERANCE_PT
    {
        return Err(StepRepeatError::InvariantViolation {
            margin_x: margins.x,
            margin_y: margins.y,
            min_x: min_margin.x,
            min_y: min_margin.y,
        });
    }

    Ok(ImpositionPlan {
        scenario: *scenario,
        sheet,
        card,
        cell,
        margins,
        back_offset,
    })
}
