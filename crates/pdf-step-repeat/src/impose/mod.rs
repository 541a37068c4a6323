//! Step-and-repeat imposition of a two-sided card
//!
//! This module orchestrates the imposition process:
//! 1. Pick the front and back pages from the source document
//! 2. Enumerate trim/rotation scenarios and select the best one
//! 3. Crop both pages and center the final grid on the sheet
//! 4. Render one output page per side
//!
//! Everything up to step 3 runs before any output object is created, so
//! a failed plan never produces a partial document.

mod io;
mod sheet;
mod trim;

pub use io::{default_output_path, load_pdf, save_pdf};
pub use trim::crop_page_all_sides;

use crate::layout::{
    ImpositionPlan, Scenario, SheetSide, compose_plan, enumerate_scenarios, select_scenario,
};
use crate::options::StepRepeatOptions;
use crate::render::read_page_box;
use crate::types::*;
use lopdf::{Document, ObjectId};
use sheet::build_output;

/// Main imposition function.
///
/// The source document is not modified; trimming happens on a copy.
pub async fn impose(document: &Document, options: &StepRepeatOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_sync(document, &options)).await?
}

fn impose_sync(mut source: Document, options: &StepRepeatOptions) -> Result<Document> {
    let prepared = prepare(&mut source, options)?;
    build_output(&source, &prepared)
}

/// Outcome of planning: the card pages and the geometry to place them with
#[derive(Debug, Clone)]
pub(crate) struct PreparedImposition {
    pub front_page: ObjectId,
    pub back_page: ObjectId,
    /// Every viable scenario that was considered
    pub candidates: Vec<Scenario>,
    pub plan: ImpositionPlan,
}

impl PreparedImposition {
    pub fn page_for(&self, side: SheetSide) -> ObjectId {
        match side {
            SheetSide::Front => self.front_page,
            SheetSide::Back => self.back_page,
        }
    }
}

/// Plan the imposition and crop the card pages of `source` accordingly.
pub(crate) fn prepare(
    source: &mut Document,
    options: &StepRepeatOptions,
) -> Result<PreparedImposition> {
    options.validate()?;

    let (front_page, back_page) = card_pages(source)?;

    // Untrimmed card size; the back is assumed to match the front
    let card = read_page_box(source, front_page)?.dimension();
    let sheet = options.sheet_format.dimensions_pt();
    let min_margin = options.margins.to_points();

    let candidates = enumerate_scenarios(card, sheet, min_margin, &options.trim_candidates_mm)?;
    let best = select_scenario(&candidates)?;
    log::info!(
        "Selected {} cards per sheet: {} x {}, trim {} mm, rotated: {}",
        best.capacity(),
        best.cols,
        best.rows,
        best.trim_mm,
        best.rotate
    );

    crop_page_all_sides(source, front_page, best.trim_mm)?;
    if back_page != front_page {
        crop_page_all_sides(source, back_page, best.trim_mm)?;
    }

    // The cropped page box is the source of truth from here on
    let card = read_page_box(source, front_page)?.dimension();
    let plan = compose_plan(
        &best,
        card,
        sheet,
        min_margin,
        options.back_offset.to_points(),
    )?;
    log::info!(
        "Grid centered with margins {:.2} x {:.2} pt",
        plan.margins.x,
        plan.margins.y
    );

    Ok(PreparedImposition {
        front_page,
        back_page,
        candidates,
        plan,
    })
}

/// The first two pages: front and back of the card
fn card_pages(doc: &Document) -> Result<(ObjectId, ObjectId)> {
    let pages = doc.get_pages();
    let mut ids = pages.values().copied();

    match (ids.next(), ids.next()) {
        (Some(front), Some(back)) => Ok((front, back)),
        _ => Err(StepRepeatError::MissingSides { found: pages.len() }),
    }
}
