// tests/stats_pipeline.rs
//
// End-to-end over the in-memory pipeline: parts rows → merge → grouped
// stats → binned distributions, the same path the GUI tabs render from.
//
use parts_tracker::stats::{bin_prices, brand_stats, price_stats};
use parts_tracker::store::{merge_parts, parts_headers, DataSet};

fn part(name: &str, brand: &str, cat: &str, retailer: &str, price: f64) -> Vec<String> {
    vec![
        name.into(),
        brand.into(),
        cat.into(),
        retailer.into(),
        format!("{:.2}", price),
        "2026-08-06".into(),
        format!("https://example.test/{}", name.replace(' ', "-")),
    ]
}

#[test]
fn evenly_spaced_series_one_sample_per_bin() {
    // 10, 20, ..., 100 → ten bins of width 9, each holding one sample
    let series: Vec<f64> = (1..=10).map(|i| (i * 10) as f64).collect();
    let bins = bin_prices(&series);

    assert_eq!(bins.len(), 10);
    for (i, b) in bins.iter().enumerate() {
        assert_eq!(b.count, 1);
        assert_eq!(b.normalized, 1.0);
        let expect_start = 10.0 + i as f64 * 9.0;
        assert!((b.range_start - expect_start).abs() < 1e-9);
        assert!((b.range_end - (expect_start + 9.0)).abs() < 1e-9);
    }
}

#[test]
fn identical_prices_collapse_into_first_bin() {
    let bins = bin_prices(&[50.0, 50.0, 50.0]);
    assert_eq!(bins[0].count, 3);
    assert_eq!(bins[0].normalized, 1.0);
    assert!(bins[1..].iter().all(|b| b.count == 0 && b.normalized == 0.0));
}

#[test]
fn empty_series_has_no_bins() {
    assert!(bin_prices(&[]).is_empty());
}

#[test]
fn scraped_rows_flow_into_brand_distributions() {
    let mut base = DataSet { headers: Some(parts_headers()), rows: Vec::new() };

    let pass = DataSet {
        headers: Some(parts_headers()),
        rows: vec![
            part("Filter A", "Toyota", "oil filter", "Online Car Parts", 120.0),
            part("Filter B", "Toyota", "oil filter", "AfricaBoyz Online", 180.0),
            part("Pads A", "Toyota", "brake pads", "Online Car Parts", 520.0),
            part("Filter C", "Ford", "oil filter", "Online Car Parts", 95.0),
        ],
    };
    merge_parts(&mut base, pass);

    let summaries = brand_stats(&base.rows);
    assert_eq!(summaries.len(), 2);

    // Ordered by average desc: Toyota (273.33) before Ford (95.00)
    assert_eq!(summaries[0].brand, "Toyota");
    assert_eq!(summaries[0].total_parts, 3);
    assert_eq!(summaries[0].bins.len(), 10);
    let counted: usize = summaries[0].bins.iter().map(|b| b.count).sum();
    assert_eq!(counted, summaries[0].prices.len());

    // Single-listing brand still gets a full (degenerate) histogram
    assert_eq!(summaries[1].brand, "Ford");
    assert_eq!(summaries[1].bins[0].count, 1);
}

#[test]
fn rescrape_updates_stats_instead_of_duplicating() {
    let mut base = DataSet { headers: Some(parts_headers()), rows: Vec::new() };

    merge_parts(&mut base, DataSet {
        headers: Some(parts_headers()),
        rows: vec![part("Filter A", "Toyota", "oil filter", "Online Car Parts", 100.0)],
    });
    // Second pass over the same (brand, category, retailer) group: new price
    merge_parts(&mut base, DataSet {
        headers: Some(parts_headers()),
        rows: vec![part("Filter A", "Toyota", "oil filter", "Online Car Parts", 140.0)],
    });

    assert_eq!(base.rows.len(), 1);
    let stats = price_stats(&base.rows);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].avg, 140.0);
    assert_eq!(stats[0].retailers, 1);
}

#[test]
fn price_stats_distinct_retailer_count() {
    let rows = vec![
        part("X", "BMW", "radiator", "Online Car Parts", 2500.0),
        part("Y", "BMW", "radiator", "AfricaBoyz Online", 2900.0),
        part("Z", "BMW", "radiator", "AfricaBoyz Online", 3100.0),
    ];
    let stats = price_stats(&rows);
    assert_eq!(stats[0].retailers, 2);
    assert_eq!(stats[0].min, 2500.0);
    assert_eq!(stats[0].max, 3100.0);
}
