//! Card placement within grid cells
//!
//! This module turns an imposition plan into one transform per cell and
//! per sheet side. Cards are drawn in card space with their box starting
//! at (0, 0); the transform maps that box onto the cell.

use super::{
    CellPlacement, Dimension, GridPosition, ImpositionPlan, PlacementTransform, Point, SheetSide,
};

/// Lower-left corner of a cell on the given side.
///
/// The back side is shifted by the plan's duplex correction.
pub fn cell_origin(plan: &ImpositionPlan, pos: GridPosition, side: SheetSide) -> Point {
    let origin = Point::new(
        plan.margins.x + pos.col as f32 * plan.cell.width,
        plan.margins.y + pos.row as f32 * plan.cell.height,
    );
    match side {
        SheetSide::Front => origin,
        SheetSide::Back => origin.offset_by(plan.back_offset),
    }
}

/// Transform that draws a card of size `card` into the cell at `origin`.
///
/// A 90° counter-clockwise rotation about the origin moves the card box to
/// `[-h, 0] x [0, w]`. Translating by `origin.x + h` brings its lower-left
/// corner back onto the cell origin.
pub fn placement_transform(origin: Point, rotate: bool, card: Dimension) -> PlacementTransform {
    let translate = if rotate {
        Point::new(origin.x + card.height, origin.y)
    } else {
        origin
    };
    PlacementTransform { rotate, translate }
}

/// Placements for every cell on one side, row by row from the bottom.
pub fn side_placements(plan: &ImpositionPlan, side: SheetSide) -> Vec<CellPlacement> {
    let scenario = &plan.scenario;
    let mut placements = Vec::with_capacity(scenario.capacity());

    for row in 0..scenario.rows {
        for col in 0..scenario.cols {
            let grid_pos = GridPosition::new(row, col);
            let origin = cell_origin(plan, grid_pos, side);
            placements.push(CellPlacement {
                grid_pos,
                origin,
                transform: placement_transform(origin, scenario.rotate, plan.card),
            });
        }
    }

    placements
}
