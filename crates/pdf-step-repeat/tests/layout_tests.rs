use pdf_step_repeat::constants::{MARGIN_TOLERANCE_PT, mm_to_pt};
use pdf_step_repeat::layout::*;
use pdf_step_repeat::*;

const TRIMS: [f32; 2] = [0.0, 2.0];

fn card_mm(width: f32, height: f32) -> Dimension {
    Dimension::new(mm_to_pt(width), mm_to_pt(height))
}

fn margins_mm(margin: f32) -> AxisMargins {
    MarginSpec::uniform(margin).to_points()
}

fn plan_for(
    card: Dimension,
    sheet: Dimension,
    min_margin: AxisMargins,
) -> Result<ImpositionPlan> {
    let scenarios = enumerate_scenarios(card, sheet, min_margin, &TRIMS)?;
    let best = select_scenario(&scenarios)?;
    let trimmed = card
        .trimmed(mm_to_pt(best.trim_mm))
        .expect("enumeration only keeps trims that leave a card");
    compose_plan(&best, trimmed, sheet, min_margin, Point::default())
}

#[test]
fn test_business_card_on_a4() {
    let sheet = SheetFormat::A4.dimensions_pt();
    let scenarios =
        enumerate_scenarios(card_mm(90.0, 50.0), sheet, margins_mm(5.0), &TRIMS).unwrap();

    assert!(scenarios.len() <= 4);
    for scenario in &scenarios {
        assert!(scenario.cols >= 1 && scenario.rows >= 1);
        assert_eq!(scenario.capacity(), scenario.cols * scenario.rows);
    }

    // Usable area is about 200 x 287 mm: 90 fits twice, 50 fits five times
    let plain = scenarios
        .iter()
        .find(|s| s.trim_mm == 0.0 && !s.rotate)
        .unwrap();
    assert_eq!((plain.cols, plain.rows), (2, 5));

    let best = select_scenario(&scenarios).unwrap();
    let max_capacity = scenarios.iter().map(Scenario::capacity).max().unwrap();
    assert_eq!(best.capacity(), max_capacity);
    // 2 mm trim gives 86 x 46 mm cards: 2 x 6 upright
    assert_eq!(best.capacity(), 12);
}

#[test]
fn test_trim_wins_when_it_adds_cards() {
    // 101 x 72 mm barely misses a second column; trimmed to 97 x 68 mm it fits 2 x 4
    let scenarios = enumerate_scenarios(
        card_mm(101.0, 72.0),
        SheetFormat::A4.dimensions_pt(),
        margins_mm(5.0),
        &TRIMS,
    )
    .unwrap();

    let best = select_scenario(&scenarios).unwrap();
    assert_eq!(best.trim_mm, 2.0);
    assert!(!best.rotate);
    assert_eq!((best.cols, best.rows), (2, 4));
}

#[test]
fn test_tie_prefers_less_trim_then_no_rotation() {
    // 55 x 95 mm: rotated fits 2 x 5 both with and without trim
    let scenarios = enumerate_scenarios(
        card_mm(55.0, 95.0),
        SheetFormat::A4.dimensions_pt(),
        margins_mm(5.0),
        &TRIMS,
    )
    .unwrap();

    let rotated: Vec<_> = scenarios.iter().filter(|s| s.rotate).collect();
    assert_eq!(rotated.len(), 2);
    assert!(rotated.iter().all(|s| s.capacity() == 10));

    let best = select_scenario(&scenarios).unwrap();
    assert_eq!(best.trim_mm, 0.0);
    assert!(best.rotate);
    assert_eq!((best.cols, best.rows), (2, 5));
    assert_eq!(best.cell, card_mm(55.0, 95.0).swapped());
}

#[test]
fn test_equal_capacity_prefers_no_rotation() {
    let card = Dimension::new(100.0, 50.0);
    let scenarios = enumerate_scenarios(
        card,
        Dimension::new(320.0, 420.0),
        AxisMargins::new(10.0, 10.0),
        &[0.0],
    )
    .unwrap();

    // 3 x 8 upright and 6 x 4 rotated
    assert!(scenarios.iter().all(|s| s.capacity() == 24));
    assert!(!select_scenario(&scenarios).unwrap().rotate);
}

#[test]
fn test_selection_is_deterministic() {
    let scenarios = enumerate_scenarios(
        card_mm(85.0, 55.0),
        SheetFormat::SRA3.dimensions_pt(),
        margins_mm(5.0),
        &TRIMS,
    )
    .unwrap();

    let first = select_scenario(&scenarios).unwrap();
    let second = select_scenario(&scenarios).unwrap();
    assert_eq!(first, second);

    let mut reversed = scenarios.clone();
    reversed.reverse();
    assert_eq!(select_scenario(&reversed).unwrap(), first);
}

#[test]
fn test_capacity_never_grows_with_margin() {
    let card = card_mm(85.0, 55.0);
    let sheet = SheetFormat::A3.dimensions_pt();

    let mut previous = usize::MAX;
    for margin in 0..=60 {
        let min_margin = margins_mm(margin as f32);
        let scenarios = match enumerate_scenarios(card, sheet, min_margin, &TRIMS) {
            Ok(scenarios) => scenarios,
            Err(StepRepeatError::MarginTooLarge { .. }) => break,
            Err(e) => panic!("Unexpected error: {e}"),
        };
        let Ok(best) = select_scenario(&scenarios) else {
            break;
        };
        assert!(
            best.capacity() <= previous,
            "capacity grew from {previous} to {} at {margin} mm",
            best.capacity()
        );
        previous = best.capacity();
    }
    assert!(previous < usize::MAX);
}

#[test]
fn test_final_margins_center_grid_on_sheet() {
    let cases = [
        (card_mm(90.0, 50.0), SheetFormat::A4, 5.0),
        (card_mm(85.0, 55.0), SheetFormat::A3, 7.5),
        (card_mm(101.0, 72.0), SheetFormat::A4, 5.0),
        (card_mm(55.0, 95.0), SheetFormat::SRA4, 3.0),
        (card_mm(200.0, 120.0), SheetFormat::SRA3, 10.0),
    ];

    for (card, format, margin) in cases {
        let sheet = format.dimensions_pt();
        let min_margin = margins_mm(margin);
        let plan = plan_for(card, sheet, min_margin).unwrap();

        let grid = plan.grid_extent();
        assert_eq!(plan.margins.x, (sheet.width - grid.width) / 2.0);
        assert_eq!(plan.margins.y, (sheet.height - grid.height) / 2.0);
        assert!(plan.margins.x >= min_margin.x - MARGIN_TOLERANCE_PT);
        assert!(plan.margins.y >= min_margin.y - MARGIN_TOLERANCE_PT);
        assert_eq!(plan.cell, plan.card.oriented(plan.scenario.rotate));
    }
}

#[test]
fn test_final_margin_at_least_inner_margin() {
    let sheet = SheetFormat::A4.dimensions_pt();
    let min_margin = margins_mm(5.0);
    let plan = plan_for(card_mm(90.0, 50.0), sheet, min_margin).unwrap();

    // Centering on the whole sheet adds the minimum margin to the inner one
    let inner = plan.scenario.inner_margin;
    assert!((plan.margins.x - (min_margin.x + inner.x)).abs() < MARGIN_TOLERANCE_PT);
    assert!((plan.margins.y - (min_margin.y + inner.y)).abs() < MARGIN_TOLERANCE_PT);
}

#[test]
fn test_margin_too_large() {
    let result = enumerate_scenarios(
        card_mm(90.0, 50.0),
        SheetFormat::A4.dimensions_pt(),
        MarginSpec {
            x_mm: 110.0,
            y_mm: 5.0,
        }
        .to_points(),
        &TRIMS,
    );

    assert!(matches!(
        result,
        Err(StepRepeatError::MarginTooLarge { .. })
    ));
}

#[test]
fn test_card_larger_than_sheet() {
    let scenarios = enumerate_scenarios(
        card_mm(400.0, 500.0),
        SheetFormat::A4.dimensions_pt(),
        margins_mm(5.0),
        &TRIMS,
    )
    .unwrap();

    assert!(scenarios.is_empty());
    assert!(matches!(
        select_scenario(&scenarios),
        Err(StepRepeatError::NoViableScenario)
    ));
}

#[test]
fn test_trim_that_erases_card_is_skipped() {
    let scenarios = enumerate_scenarios(
        card_mm(3.0, 30.0),
        SheetFormat::A4.dimensions_pt(),
        margins_mm(5.0),
        &TRIMS,
    )
    .unwrap();

    assert_eq!(scenarios.len(), 2);
    assert!(scenarios.iter().all(|s| s.trim_mm == 0.0));
}

#[test]
fn test_zero_trim_keeps_dimension() {
    let card = card_mm(90.0, 50.0);
    assert_eq!(card.trimmed(0.0), Some(card));
}
