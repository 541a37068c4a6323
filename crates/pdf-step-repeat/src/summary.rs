use crate::impose::prepare;
use crate::layout::{Dimension, ImpositionPlan, Scenario};
use crate::options::StepRepeatOptions;
use crate::types::*;
use lopdf::Document;

/// What an imposition run would produce, without rendering anything
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionSummary {
    pub sheet_format: SheetFormat,
    /// Minimum print margins that were requested
    pub margins: MarginSpec,
    pub back_offset: BackOffset,
    /// Every viable scenario, in enumeration order
    pub candidates: Vec<Scenario>,
    pub plan: ImpositionPlan,
}

impl ImpositionSummary {
    /// Cards per sheet side
    pub fn capacity(&self) -> usize {
        self.plan.scenario.capacity()
    }

    pub fn sheet(&self) -> Dimension {
        self.plan.sheet
    }

    /// Card size after trimming, before rotation
    pub fn final_card(&self) -> Dimension {
        self.plan.card
    }
}

/// Plan the imposition of `document` and report the outcome.
///
/// The document itself is left untouched.
pub fn calculate_summary(
    document: &Document,
    options: &StepRepeatOptions,
) -> Result<ImpositionSummary> {
    let mut scratch = document.clone();
    let prepared = prepare(&mut scratch, options)?;

    Ok(ImpositionSummary {
        sheet_format: options.sheet_format,
        margins: options.margins,
        back_offset: options.back_offset,
        candidates: prepared.candidates,
        plan: prepared.plan,
    })
}
