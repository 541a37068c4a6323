use crate::constants::DEFAULT_TRIM_CANDIDATES_MM;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Step-and-repeat configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StepRepeatOptions {
    /// Stock sheet the cards are imposed on
    pub sheet_format: SheetFormat,

    /// Minimum print margins
    pub margins: MarginSpec,

    /// Trim amounts to try, per edge (mm)
    pub trim_candidates_mm: Vec<f32>,

    /// Duplex correction applied to the back side
    pub back_offset: BackOffset,
}

impl Default for StepRepeatOptions {
    fn default() -> Self {
        Self {
            sheet_format: SheetFormat::A4,
            margins: MarginSpec::default(),
            trim_candidates_mm: DEFAULT_TRIM_CANDIDATES_MM.to_vec(),
            back_offset: BackOffset::default(),
        }
    }
}

impl StepRepeatOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| StepRepeatError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StepRepeatError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let MarginSpec { x_mm, y_mm } = self.margins;
        if !(x_mm.is_finite() && y_mm.is_finite()) || x_mm < 0.0 || y_mm < 0.0 {
            return Err(StepRepeatError::Config(format!(
                "Margins must be finite and non-negative, got {} x {} mm",
                x_mm, y_mm
            )));
        }

        if self.trim_candidates_mm.is_empty() {
            return Err(StepRepeatError::Config(
                "At least one trim candidate is required".to_string(),
            ));
        }

        for (idx, &trim) in self.trim_candidates_mm.iter().enumerate() {
            if !trim.is_finite() || trim < 0.0 {
                return Err(StepRepeatError::Config(format!(
                    "Trim candidates must be finite and non-negative, got {} mm",
                    trim
                )));
            }
            if self.trim_candidates_mm[..idx].contains(&trim) {
                return Err(StepRepeatError::Config(format!(
                    "Duplicate trim candidate {} mm",
                    trim
                )));
            }
        }

        let BackOffset { x_mm, y_mm } = self.back_offset;
        if !(x_mm.is_finite() && y_mm.is_finite()) {
            return Err(StepRepeatError::Config(
                "Back offset must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
