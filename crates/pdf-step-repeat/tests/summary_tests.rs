use lopdf::{Dictionary, Document, Object};
use pdf_step_repeat::constants::mm_to_pt;
use pdf_step_repeat::*;

/// `page_count` blank pages of the given size
fn create_card_pdf(width_mm: f32, height_mm: f32, page_count: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..page_count {
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(mm_to_pt(width_mm)),
                    Object::Real(mm_to_pt(height_mm)),
                ]),
            ),
        ]));
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(page_count as i64)),
        ])),
    );

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

#[test]
fn test_summary_business_card_a4() {
    let doc = create_card_pdf(90.0, 50.0, 2);
    let options = StepRepeatOptions::default();

    let summary = calculate_summary(&doc, &options).unwrap();

    assert_eq!(summary.sheet_format, SheetFormat::A4);
    assert_eq!(summary.capacity(), 12);
    assert_eq!(summary.sheet(), SheetFormat::A4.dimensions_pt());
    assert_eq!(summary.margins, MarginSpec::default());
    assert_eq!(summary.back_offset, BackOffset::default());
    assert!(!summary.candidates.is_empty() && summary.candidates.len() <= 4);

    let best = summary
        .candidates
        .iter()
        .map(|s| s.capacity())
        .max()
        .unwrap();
    assert_eq!(summary.capacity(), best);
}

#[test]
fn test_summary_reports_trimmed_card() {
    let doc = create_card_pdf(101.0, 72.0, 2);
    let summary = calculate_summary(&doc, &StepRepeatOptions::default()).unwrap();

    assert_eq!(summary.plan.scenario.trim_mm, 2.0);
    assert_eq!(summary.capacity(), 8);

    let card = summary.final_card();
    let trim = 2.0 * mm_to_pt(2.0);
    assert!((card.width - (mm_to_pt(101.0) - trim)).abs() < 1e-3);
    assert!((card.height - (mm_to_pt(72.0) - trim)).abs() < 1e-3);
}

#[test]
fn test_summary_rotated_card() {
    let doc = create_card_pdf(55.0, 95.0, 2);
    let summary = calculate_summary(&doc, &StepRepeatOptions::default()).unwrap();

    let scenario = summary.plan.scenario;
    assert!(scenario.rotate);
    assert_eq!(scenario.trim_mm, 0.0);
    assert_eq!((scenario.cols, scenario.rows), (2, 5));
    // The reported card keeps its upright orientation
    assert!(summary.final_card().width < summary.final_card().height);
}

#[test]
fn test_summary_does_not_modify_document() {
    let doc = create_card_pdf(101.0, 72.0, 2);
    let before = doc.get_pages().len();
    let page_id = *doc.get_pages().values().next().unwrap();
    let media_box = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .clone();

    calculate_summary(&doc, &StepRepeatOptions::default()).unwrap();

    assert_eq!(doc.get_pages().len(), before);
    assert_eq!(
        doc.get_dictionary(page_id)
            .unwrap()
            .get(b"MediaBox")
            .unwrap(),
        &media_box
    );
}

#[test]
fn test_summary_other_sheet_format() {
    let doc = create_card_pdf(90.0, 50.0, 2);
    let options = StepRepeatOptions {
        sheet_format: SheetFormat::SRA3,
        ..Default::default()
    };

    let summary = calculate_summary(&doc, &options).unwrap();
    assert_eq!(summary.sheet(), SheetFormat::SRA3.dimensions_pt());
    assert!(summary.capacity() > 12);
}

#[test]
fn test_summary_errors() {
    let single = create_card_pdf(90.0, 50.0, 1);
    assert!(matches!(
        calculate_summary(&single, &StepRepeatOptions::default()),
        Err(StepRepeatError::MissingSides { found: 1 })
    ));

    let empty = create_card_pdf(90.0, 50.0, 0);
    assert!(matches!(
        calculate_summary(&empty, &StepRepeatOptions::default()),
        Err(StepRepeatError::MissingSides { found: 0 })
    ));

    let huge = create_card_pdf(400.0, 500.0, 2);
    assert!(matches!(
        calculate_summary(&huge, &StepRepeatOptions::default()),
        Err(StepRepeatError::NoViableScenario)
    ));
}
