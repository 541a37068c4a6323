use crate::constants::{
    DEFAULT_BACK_OFFSET_X_MM, DEFAULT_BACK_OFFSET_Y_MM, DEFAULT_MARGIN_MM, mm_to_pt,
};
use crate::layout::{AxisMargins, Dimension, Point};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepRepeatError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Unknown paper format '{0}'. Choose from: A4, A3, SRA4, SRA3")]
    UnknownFormat(String),
    #[error(
        "Print margin is too large for the chosen paper format \
         (usable area {usable_width_pt:.2} x {usable_height_pt:.2} pt)"
    )]
    MarginTooLarge {
        usable_width_pt: f32,
        usable_height_pt: f32,
    },
    #[error(
        "No card fits on the chosen paper format with the given print margins, \
         not even with trim or rotation"
    )]
    NoViableScenario,
    #[error("Trim of {trim_mm} mm leaves no usable card area")]
    OverTrimmed { trim_mm: f32 },
    #[error(
        "Internal error: computed margin ({margin_x:.3} x {margin_y:.3} pt) is smaller than \
         the minimum print margin ({min_x:.3} x {min_y:.3} pt)"
    )]
    InvariantViolation {
        margin_x: f32,
        margin_y: f32,
        min_x: f32,
        min_y: f32,
    },
    #[error(
        "Card page is too small to impose ({width_pt:.3} x {height_pt:.3} pt), \
         check its MediaBox"
    )]
    DegenerateCard { width_pt: f32, height_pt: f32 },
    #[error("Input PDF needs at least 2 pages (front and back), found {found}")]
    MissingSides { found: usize },
}

pub type Result<T> = std::result::Result<T, StepRepeatError>;

/// Stock sheet formats the cards can be imposed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetFormat {
    #[default]
    A4,
    A3,
    SRA4,
    SRA3,
}

impl SheetFormat {
    pub const ALL: [SheetFormat; 4] = [
        SheetFormat::A4,
        SheetFormat::A3,
        SheetFormat::SRA4,
        SheetFormat::SRA3,
    ];

    /// Resolve a format name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StepRepeatError::UnknownFormat(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            SheetFormat::A4 => "A4",
            SheetFormat::A3 => "A3",
            SheetFormat::SRA4 => "SRA4",
            SheetFormat::SRA3 => "SRA3",
        }
    }

    /// Portrait dimensions (width, height) in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            SheetFormat::A4 => (210.0, 297.0),
            SheetFormat::A3 => (297.0, 420.0),
            SheetFormat::SRA4 => (225.0, 320.0),
            SheetFormat::SRA3 => (320.0, 450.0),
        }
    }

    /// Portrait dimensions in points
    pub fn dimensions_pt(self) -> Dimension {
        let (w, h) = self.dimensions_mm();
        Dimension::new(mm_to_pt(w), mm_to_pt(h))
    }
}

impl FromStr for SheetFormat {
    type Err = StepRepeatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Minimum print margin, applied to both edges of each axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarginSpec {
    /// Left and right margin
    pub x_mm: f32,
    /// Top and bottom margin
    pub y_mm: f32,
}

impl Default for MarginSpec {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN_MM)
    }
}

impl MarginSpec {
    /// Same margin on every edge
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            x_mm: margin_mm,
            y_mm: margin_mm,
        }
    }

    /// A symmetric margin, when given, overrides the per-axis values
    pub fn resolve(symmetric_mm: Option<f32>, x_mm: f32, y_mm: f32) -> Self {
        match symmetric_mm {
            Some(margin) => Self::uniform(margin),
            None => Self { x_mm, y_mm },
        }
    }

    pub fn to_points(self) -> AxisMargins {
        AxisMargins::new(mm_to_pt(self.x_mm), mm_to_pt(self.y_mm))
    }
}

/// Fixed shift applied to every back side placement to compensate for
/// the printer's duplex misregistration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackOffset {
    pub x_mm: f32,
    pub y_mm: f32,
}

impl Default for BackOffset {
    fn default() -> Self {
        Self {
            x_mm: DEFAULT_BACK_OFFSET_X_MM,
            y_mm: DEFAULT_BACK_OFFSET_Y_MM,
        }
    }
}

impl BackOffset {
    pub fn none() -> Self {
        Self {
            x_mm: 0.0,
            y_mm: 0.0,
        }
    }

    pub fn to_points(self) -> Point {
        Point::new(mm_to_pt(self.x_mm), mm_to_pt(self.y_mm))
    }
}
