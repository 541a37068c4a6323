//! Layout data types for step-and-repeat imposition
//!
//! These types carry the geometry between scenario planning and PDF
//! rendering. All values are in points.

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

impl SheetSide {
    pub const BOTH: [SheetSide; 2] = [SheetSide::Front, SheetSide::Back];
}

/// Width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
}

impl Dimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width and height exchanged
    pub fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// The dimension a card occupies in the grid, given its rotation flag
    pub fn oriented(self, rotate: bool) -> Self {
        if rotate { self.swapped() } else { self }
    }

    /// Remove `trim_pt` from all four edges.
    ///
    /// Returns `None` when nothing would be left on either axis.
    pub fn trimmed(self, trim_pt: f32) -> Option<Self> {
        if trim_pt <= 0.0 {
            return Some(self);
        }
        let width = self.width - 2.0 * trim_pt;
        let height = self.height - 2.0 * trim_pt;
        (width > 0.0 && height > 0.0).then(|| Self::new(width, height))
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Both sides are at least `min`; false for NaN sizes
    pub fn is_at_least(&self, min: f32) -> bool {
        self.width >= min && self.height >= min
    }
}

/// A position or displacement on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

/// Margin per axis, the same on both edges of that axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMargins {
    /// Left and right
    pub x: f32,
    /// Bottom and top
    pub y: f32,
}

impl AxisMargins {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = bottom row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One candidate trim/rotation configuration that fits at least one card.
///
/// Scenarios are produced by [`enumerate_scenarios`](super::enumerate_scenarios)
/// and only ever exist in viable form: `cols` and `rows` are both at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Trim removed from every edge of the card (mm)
    pub trim_mm: f32,
    /// Card is turned 90° in the grid
    pub rotate: bool,
    pub cols: usize,
    pub rows: usize,
    /// Margin that centers the grid inside the usable area only.
    /// Diagnostic; final placement uses [`ImpositionPlan::margins`].
    pub inner_margin: AxisMargins,
    /// Grid cell size (trimmed card, axes swapped when rotated)
    pub cell: Dimension,
}

impl Scenario {
    /// Number of cards per sheet
    pub fn capacity(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }
}

/// The selected scenario with its final placement on the whole sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpositionPlan {
    pub scenario: Scenario,
    /// Sheet size
    pub sheet: Dimension,
    /// Card size after trimming, before any rotation
    pub card: Dimension,
    /// Grid cell size with rotation applied
    pub cell: Dimension,
    /// Distance from the sheet edges to the grid
    pub margins: AxisMargins,
    /// Extra shift applied to every back side cell
    pub back_offset: Point,
}

impl ImpositionPlan {
    /// Total grid size on the sheet
    pub fn grid_extent(&self) -> Dimension {
        Dimension::new(
            self.scenario.cols as f32 * self.cell.width,
            self.scenario.rows as f32 * self.cell.height,
        )
    }
}

/// How a card is drawn into a cell: an optional 90° counter-clockwise
/// rotation about the origin, followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementTransform {
    pub rotate: bool,
    pub translate: Point,
}

impl PlacementTransform {
    /// PDF `cm` operands `[a b c d e f]`
    pub fn matrix(&self) -> [f32; 6] {
        let Point { x, y } = self.translate;
        if self.rotate {
            [0.0, 1.0, -1.0, 0.0, x, y]
        } else {
            [1.0, 0.0, 0.0, 1.0, x, y]
        }
    }

    /// Map a point from card space onto the sheet
    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.matrix();
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }
}

/// Final placement of one card copy on one side of the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    pub grid_pos: GridPosition,
    /// Lower-left corner of the cell, back offset included
    pub origin: Point,
    pub transform: PlacementTransform,
}
