//! Scenario enumeration and selection
//!
//! Every (trim, rotation) combination is evaluated against the usable
//! area of the sheet. The viable ones are returned as an immutable list
//! and the best one is picked by capacity, then by less trim, then by
//! no rotation.

use std::cmp::Ordering;

use crate::constants::{MIN_CARD_SIZE_MM, mm_to_pt};
use crate::types::{Result, StepRepeatError};

use super::{AxisMargins, Dimension, Scenario};

// =============================================================================
// Usable Area
// =============================================================================

/// Area left on the sheet after removing the minimum margin from both
/// edges of each axis.
///
/// Fails with `MarginTooLarge` when nothing is left on either axis.
pub fn usable_area(sheet: Dimension, min_margin: AxisMargins) -> Result<Dimension> {
    let usable = Dimension::new(
        sheet.width - 2.0 * min_margin.x,
        sheet.height - 2.0 * min_margin.y,
    );
    if !usable.is_positive() {
        return Err(StepRepeatError::MarginTooLarge {
            usable_width_pt: usable.width,
            usable_height_pt: usable.height,
        });
    }
    Ok(usable)
}

// =============================================================================
// Grid Fit
// =============================================================================

/// How many cells of `cell` size fit in `area`, and the margin that
/// centers that grid inside `area`.
///
/// Returns `None` if not even one cell fits, or if `cell` has no area.
pub fn fit_grid(cell: Dimension, area: Dimension) -> Option<(usize, usize, AxisMargins)> {
    if !cell.is_positive() {
        return None;
    }

    let cols = (area.width / cell.width).floor() as usize;
    let rows = (area.height / cell.height).floor() as usize;

    if cols == 0 || rows == 0 {
        return None;
    }

    let used_w = cols as f32 * cell.width;
    let used_h = rows as f32 * cell.height;

    Some((
        cols,
        rows,
        AxisMargins::new((area.width - used_w) / 2.0, (area.height - used_h) / 2.0),
    ))
}

// =============================================================================
// Enumeration
// =============================================================================

/// Build every viable scenario for the given card and sheet.
///
/// # Arguments
/// * `card` - Untrimmed card size in points
/// * `sheet` - Sheet size in points
/// * `min_margin` - Minimum print margin per axis in points
/// * `trim_candidates_mm` - Trim amounts to try, per edge, in millimeters
///
/// The result holds at most two scenarios per trim candidate (unrotated and
/// rotated) and may be empty when the card does not fit at all.
///
/// Fails with `DegenerateCard` when either side of `card` is shorter than
/// [`MIN_CARD_SIZE_MM`]. Trims that would take the card below that size
/// are skipped.
pub fn enumerate_scenarios(
    card: Dimension,
    sheet: Dimension,
    min_margin: AxisMargins,
    trim_candidates_mm: &[f32],
) -> Result<Vec<Scenario>> {
    let min_card = mm_to_pt(MIN_CARD_SIZE_MM);
    if !card.is_at_least(min_card) {
        return Err(StepRepeatError::DegenerateCard {
            width_pt: card.width,
            height_pt: card.height,
        });
    }

    let usable = usable_area(sheet, min_margin)?;
    let mut scenarios = Vec::with_capacity(trim_candidates_mm.len() * 2);

    for &trim_mm in trim_candidates_mm {
        let Some(trimmed) = card
            .trimmed(mm_to_pt(trim_mm))
            .filter(|trimmed| trimmed.is_at_least(min_card))
        else {
            log::debug!("Skipping trim of {trim_mm} mm: nothing usable left of the card");
            continue;
        };

        for rotate in [false, true] {
            let cell = trimmed.oriented(rotate);
            match fit_grid(cell, usable) {
                Some((cols, rows, inner_margin)) => {
                    log::debug!(
                        "Scenario trim={trim_mm} mm rotate={rotate}: {cols} x {rows} = {}",
                        cols * rows
                    );
                    scenarios.push(Scenario {
                        trim_mm,
                        rotate,
                        cols,
                        rows,
                        inner_margin,
                        cell,
                    });
                }
                None => {
                    log::debug!("Scenario trim={trim_mm} mm rotate={rotate}: does not fit");
                }
            }
        }
    }

    Ok(scenarios)
}

// =============================================================================
// Selection
// =============================================================================

/// Ordering used to pick a scenario; the greatest one wins.
///
/// Higher capacity first, then less trim, then unrotated over rotated.
pub fn compare_scenarios(a: &Scenario, b: &Scenario) -> Ordering {
    a.capacity()
        .cmp(&b.capacity())
        .then_with(|| b.trim_mm.total_cmp(&a.trim_mm))
        .then_with(|| b.rotate.cmp(&a.rotate))
}

/// Pick the best scenario. Fails with `NoViableScenario` on an empty list.
pub fn select_scenario(scenarios: &[Scenario]) -> Result<Scenario> {
    scenarios
        .iter()
        .copied()
        .max_by(compare_scenarios)
        .ok_or(StepRepeatError::NoViableScenario)
}
