// src/stats/summary.rs
//
// Grouped statistics over parts rows. Callers pass whatever row slice the
// current selection produced; rows with unparsable prices are skipped.

use std::collections::{BTreeMap, HashSet};

use crate::config::consts::{BRAND_COL, CATEGORY_COL, PRICE_COL, RETAILER_COL};
use super::histogram::{bin_prices, HistogramBin};

/// One (brand, category) aggregate for the overview table and bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceStat {
    pub brand: String,
    pub category: String,
    /// Rounded to cents.
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    /// Distinct retailers contributing to this group.
    pub retailers: usize,
}

/// Per-brand aggregate for the brand-stats page, with the price series and
/// its binned distribution ready for sparkline rendering.
#[derive(Clone, Debug)]
pub struct BrandSummary {
    pub brand: String,
    pub average: f64,
    pub total_parts: usize,
    pub prices: Vec<f64>,
    pub bins: Vec<HistogramBin>,
}

fn price_of(row: &[String]) -> Option<f64> {
    row.get(PRICE_COL)?.parse::<f64>().ok().filter(|p| p.is_finite())
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Group rows by (brand, category): average/min/max price and distinct
/// retailer count. Output is sorted by brand, then category.
pub fn price_stats(rows: &[Vec<String>]) -> Vec<PriceStat> {
    struct Acc {
        sum: f64,
        n: usize,
        min: f64,
        max: f64,
        retailers: HashSet<String>,
    }

    let mut groups: BTreeMap<(String, String), Acc> = BTreeMap::new();

    for row in rows {
        let Some(price) = price_of(row) else { continue };
        let (Some(brand), Some(category)) = (row.get(BRAND_COL), row.get(CATEGORY_COL)) else {
            continue;
        };

        let acc = groups
            .entry((brand.clone(), category.clone()))
            .or_insert_with(|| Acc {
                sum: 0.0,
                n: 0,
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
                retailers: HashSet::new(),
            });

        acc.sum += price;
        acc.n += 1;
        if price < acc.min { acc.min = price; }
        if price > acc.max { acc.max = price; }
        if let Some(r) = row.get(RETAILER_COL) {
            acc.retailers.insert(r.clone());
        }
    }

    groups
        .into_iter()
        .map(|((brand, category), acc)| PriceStat {
            brand,
            category,
            avg: round_cents(acc.sum / acc.n as f64),
            min: acc.min,
            max: acc.max,
            retailers: acc.retailers.len(),
        })
        .collect()
}

/// Group rows by brand: average price, part count, full price series and its
/// histogram. Output is ordered by average price, highest first.
pub fn brand_stats(rows: &[Vec<String>]) -> Vec<BrandSummary> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for row in rows {
        let Some(price) = price_of(row) else { continue };
        let Some(brand) = row.get(BRAND_COL) else { continue };
        groups.entry(brand.clone()).or_default().push(price);
    }

    let mut out: Vec<BrandSummary> = groups
        .into_iter()
        .map(|(brand, prices)| {
            let average = round_cents(prices.iter().sum::<f64>() / prices.len() as f64);
            let bins = bin_prices(&prices);
            BrandSummary {
                brand,
                average,
                total_parts: prices.len(),
                prices,
                bins,
            }
        })
        .collect();

    out.sort_by(|a, b| b.average.total_cmp(&a.average));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(part: &str, brand: &str, cat: &str, ret: &str, price: &str) -> Vec<String> {
        vec![s!(part), s!(brand), s!(cat), s!(ret), s!(price), s!("2026-08-06"), s!()]
    }

    fn sample() -> Vec<Vec<String>> {
        vec![
            row("Filter A", "Toyota", "oil filter", "Online Car Parts", "100.00"),
            row("Filter B", "Toyota", "oil filter", "AfricaBoyz Online", "200.00"),
            row("Pads A", "Toyota", "brake pads", "Online Car Parts", "400.00"),
            row("Filter C", "Ford", "oil filter", "Online Car Parts", "50.00"),
            row("Junk", "Ford", "oil filter", "Online Car Parts", "n/a"),
        ]
    }

    #[test]
    fn price_stats_groups_and_rounds() {
        let stats = price_stats(&sample());
        assert_eq!(stats.len(), 3);

        // BTreeMap keys: (Ford, oil filter), (Toyota, brake pads), (Toyota, oil filter)
        assert_eq!(stats[0].brand, "Ford");
        assert_eq!(stats[0].retailers, 1);
        assert_eq!(stats[0].avg, 50.0);

        let toy_oil = &stats[2];
        assert_eq!(toy_oil.category, "oil filter");
        assert_eq!(toy_oil.avg, 150.0);
        assert_eq!(toy_oil.min, 100.0);
        assert_eq!(toy_oil.max, 200.0);
        assert_eq!(toy_oil.retailers, 2);
    }

    #[test]
    fn price_stats_rounding_to_cents() {
        let rows = vec![
            row("A", "Toyota", "oil filter", "X", "100.00"),
            row("B", "Toyota", "oil filter", "X", "100.01"),
            row("C", "Toyota", "oil filter", "X", "100.01"),
        ];
        let stats = price_stats(&rows);
        assert_eq!(stats[0].avg, 100.01);
    }

    #[test]
    fn brand_stats_orders_by_average_desc() {
        let stats = brand_stats(&sample());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].brand, "Toyota");
        assert_eq!(stats[0].total_parts, 3);
        assert_eq!(stats[0].average, 233.33);
        assert_eq!(stats[1].brand, "Ford");
        assert_eq!(stats[1].total_parts, 1);
    }

    #[test]
    fn brand_stats_carries_binned_distribution() {
        let stats = brand_stats(&sample());
        let toyota = &stats[0];
        assert_eq!(toyota.bins.len(), 10);
        let total: usize = toyota.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, toyota.prices.len());

        // Single-price brand: everything in bin 0
        let ford = &stats[1];
        assert_eq!(ford.bins[0].count, 1);
        assert!(ford.bins[1..].iter().all(|b| b.count == 0));
    }

    #[test]
    fn unparsable_prices_are_skipped() {
        let stats = brand_stats(&sample());
        let ford = stats.iter().find(|s| s.brand == "Ford").unwrap();
        assert_eq!(ford.total_parts, 1); // "n/a" row ignored
    }
}
