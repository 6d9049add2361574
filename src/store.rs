// src/store.rs
//
// Local dataset cache: one CSV file per dataset under .store/.
// The canonical dataset is the scraped parts table; everything the GUI
// shows (overview stats, brand stats) is derived from it in memory.

use std::{fs, io, path::PathBuf};
use std::collections::HashSet;

use crate::config::consts::{
    BRAND_COL, CATEGORY_COL, PARTS_DATASET, PARTS_HEADERS, RETAILER_COL, STORE_DIR, STORE_SEP,
};
use crate::csv::{self, detect_headers, parse_rows};

#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Canonical headers for the parts dataset.
pub fn parts_headers() -> Vec<String> {
    PARTS_HEADERS.iter().map(|s| s!(*s)).collect()
}

fn dataset_path(name: &str) -> PathBuf {
    PathBuf::from(STORE_DIR).join(join!(name, ".csv"))
}

pub fn save_dataset(name: &str, ds: &DataSet) -> io::Result<PathBuf> {
    let path = dataset_path(name);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf: Vec<u8> = Vec::new();
    if let Some(h) = &ds.headers {
        csv::write_row(&mut buf, h, STORE_SEP)?;
    }
    for row in &ds.rows {
        csv::write_row(&mut buf, row, STORE_SEP)?;
    }
    fs::write(&path, buf)?;
    Ok(path)
}

pub fn load_dataset(name: &str) -> Result<DataSet, Box<dyn std::error::Error>> {
    let path = dataset_path(name);
    let text = fs::read_to_string(&path)?;
    let parsed = parse_rows(&text, STORE_SEP);
    let (headers, rows) = detect_headers(parsed);
    Ok(DataSet { headers, rows })
}

pub fn load_parts() -> Result<DataSet, Box<dyn std::error::Error>> {
    let mut ds = load_dataset(PARTS_DATASET)?;
    if ds.headers.is_none() {
        ds.headers = Some(parts_headers());
    }
    Ok(ds)
}

pub fn save_parts(ds: &DataSet) -> io::Result<PathBuf> {
    save_dataset(PARTS_DATASET, ds)
}

/// Shape check before trusting a cache file.
pub fn validate_parts(ds: &DataSet) -> bool {
    let want = PARTS_HEADERS.len();
    ds.rows.iter().all(|r| r.len() == want)
}

/// Merge freshly scraped rows into the canonical dataset.
///
/// A scrape pass covers a set of (brand, category, retailer) groups; stale
/// rows for exactly those groups are replaced, everything else is kept.
pub fn merge_parts(into: &mut DataSet, mut new: DataSet) {
    if new.headers.is_some() {
        into.headers = new.headers.take();
    }

    let mut scraped: HashSet<(String, String, String)> = HashSet::new();
    for r in &new.rows {
        if let (Some(b), Some(c), Some(t)) =
            (r.get(BRAND_COL), r.get(CATEGORY_COL), r.get(RETAILER_COL))
        {
            scraped.insert((b.clone(), c.clone(), t.clone()));
        }
    }

    if !scraped.is_empty() {
        into.rows.retain(|r| {
            match (r.get(BRAND_COL), r.get(CATEGORY_COL), r.get(RETAILER_COL)) {
                (Some(b), Some(c), Some(t)) => {
                    !scraped.contains(&(b.clone(), c.clone(), t.clone()))
                }
                _ => true,
            }
        });
    }

    into.rows.extend(new.rows);
}

/// Drop all rows belonging to `brand` (brand deletion cascades to parts).
pub fn remove_brand_rows(ds: &mut DataSet, brand: &str) -> usize {
    let before = ds.rows.len();
    ds.rows.retain(|r| r.get(BRAND_COL).map(|b| b != brand).unwrap_or(true));
    before - ds.rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(part: &str, brand: &str, cat: &str, ret: &str, price: &str) -> Vec<String> {
        vec![s!(part), s!(brand), s!(cat), s!(ret), s!(price), s!("2026-08-06"), s!()]
    }

    #[test]
    fn merge_replaces_only_scraped_groups() {
        let mut base = DataSet {
            headers: Some(parts_headers()),
            rows: vec![
                row("Old filter", "Toyota", "oil filter", "Online Car Parts", "100.00"),
                row("Kept pads", "Toyota", "brake pads", "Online Car Parts", "500.00"),
                row("Kept filter", "Ford", "oil filter", "Online Car Parts", "90.00"),
            ],
        };
        let fresh = DataSet {
            headers: Some(parts_headers()),
            rows: vec![
                row("New filter A", "Toyota", "oil filter", "Online Car Parts", "110.00"),
                row("New filter B", "Toyota", "oil filter", "Online Car Parts", "120.00"),
            ],
        };

        merge_parts(&mut base, fresh);

        assert_eq!(base.rows.len(), 4);
        assert!(base.rows.iter().all(|r| r[0] != "Old filter"));
        assert!(base.rows.iter().any(|r| r[0] == "Kept pads"));
        assert!(base.rows.iter().any(|r| r[0] == "Kept filter"));
    }

    #[test]
    fn remove_brand_rows_cascades() {
        let mut ds = DataSet {
            headers: Some(parts_headers()),
            rows: vec![
                row("A", "Toyota", "oil filter", "Online Car Parts", "100.00"),
                row("B", "Ford", "oil filter", "Online Car Parts", "90.00"),
                row("C", "Toyota", "brake pads", "AfricaBoyz Online", "450.00"),
            ],
        };
        let dropped = remove_brand_rows(&mut ds, "Toyota");
        assert_eq!(dropped, 2);
        assert_eq!(ds.rows.len(), 1);
        assert_eq!(ds.rows[0][1], "Ford");
    }

    #[test]
    fn validate_rejects_ragged_rows() {
        let ds = DataSet {
            headers: Some(parts_headers()),
            rows: vec![vec![s!("short"), s!("row")]],
        };
        assert!(!validate_parts(&ds));
    }
}
