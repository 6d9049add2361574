// tests/selection_view.rs
//
// SelectionView behavior: brand selection and category filtering over the
// canonical parts dataset, without any UI.
//
use parts_tracker::data::{RawData, Selection, SelectionView};
use parts_tracker::store::DataSet;

fn row(part: &str, brand: &str, cat: &str) -> Vec<String> {
    vec![
        part.into(), brand.into(), cat.into(),
        "Online Car Parts".into(), "100.00".into(), "2026-08-06".into(), String::new(),
    ]
}

fn fixture() -> (Vec<(u32, String)>, RawData) {
    let brands = vec![
        (0, "Toyota".to_string()),
        (1, "Ford".to_string()),
        (2, "BMW".to_string()),
    ];
    let ds = DataSet {
        headers: None,
        rows: vec![
            row("p1", "Toyota", "oil filter"),
            row("p2", "Ford", "oil filter"),
            row("p3", "BMW", "brake pads"),
            row("p4", "Toyota", "brake pads"),
        ],
    };
    (brands, RawData::new(ds))
}

#[test]
fn selection_none_all_partial() {
    let (brands, raw) = fixture();

    // None
    let sel = Selection { ids: &[], brands: &brands, category: None };
    let view = SelectionView::from_raw(&raw, sel);
    assert!(view.is_empty());

    // All
    let all = vec![0, 1, 2];
    let sel = Selection { ids: &all, brands: &brands, category: None };
    let view = SelectionView::from_raw(&raw, sel);
    assert_eq!(view.len(), raw.dataset().rows.len());

    // Partial: Toyota + BMW
    let pick = vec![0, 2];
    let sel = Selection { ids: &pick, brands: &brands, category: None };
    let view = SelectionView::from_raw(&raw, sel);
    assert_eq!(view.row_ix, vec![0, 2, 3]);
}

#[test]
fn category_filter_composes_with_selection() {
    let (brands, raw) = fixture();

    let all = vec![0, 1, 2];
    let sel = Selection { ids: &all, brands: &brands, category: Some("brake pads") };
    let view = SelectionView::from_raw(&raw, sel);
    assert_eq!(view.row_ix, vec![2, 3]);

    let toyota = vec![0];
    let sel = Selection { ids: &toyota, brands: &brands, category: Some("brake pads") };
    let view = SelectionView::from_raw(&raw, sel);
    assert_eq!(view.row_ix, vec![3]);
}

#[test]
fn view_materializes_rows_without_reordering() {
    let (brands, raw) = fixture();
    let toyota = vec![0];
    let sel = Selection { ids: &toyota, brands: &brands, category: None };
    let view = SelectionView::from_raw(&raw, sel);

    let rows = view.to_owned_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "p1");
    assert_eq!(rows[1][0], "p4");
    assert_eq!(view.row(1).unwrap()[0], "p4");
}

#[test]
fn unknown_brand_ids_match_nothing() {
    let (brands, raw) = fixture();
    let ghost = vec![42];
    let sel = Selection { ids: &ghost, brands: &brands, category: None };
    let view = SelectionView::from_raw(&raw, sel);
    assert!(view.is_empty());
}
