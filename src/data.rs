// src/data.rs
//
// Light wrappers around canonical and view-layer table data.
//
// - RawData: read-only holder for the canonical parts dataset (cache +
//            post-scrape). Only SCRAPE is allowed to mutate it, via an
//            explicit merge method.
// - SelectionView: derived (view) data produced from RawData by applying
//            brand-selection and category filtering for on-screen display
//            and per-brand export.

use std::io;
use std::path::PathBuf;

use crate::config::consts::{BRAND_COL, CATEGORY_COL};
use crate::store::{self, DataSet};

/// Authoritative, canonical parts dataset.
/// Loaded from cache at startup; updated only by SCRAPE.
#[derive(Clone, Debug, Default)]
pub struct RawData {
    ds: DataSet,
}

impl RawData {
    /// Build from a freshly loaded cache dataset.
    pub fn new(ds: DataSet) -> Self { Self { ds } }

    /// Read-only view of the dataset.
    pub fn dataset(&self) -> &DataSet { &self.ds }

    pub fn save(&self) -> io::Result<PathBuf> {
        store::save_parts(&self.ds)
    }

    /// Merge in newly scraped data. This is the *only* scrape-path mutator;
    /// keeps the rest of the app read-only.
    pub fn merge_from_scrape(&mut self, new: DataSet) {
        store::merge_parts(&mut self.ds, new);
    }

    /// Brand deletion cascade: drop that brand's rows. Returns rows removed.
    pub fn remove_brand(&mut self, brand: &str) -> usize {
        store::remove_brand_rows(&mut self.ds, brand)
    }
}

#[derive(Clone, Copy)]
pub struct Selection<'a> {
    pub ids: &'a [u32],
    pub brands: &'a [(u32, String)],
    /// None = all categories
    pub category: Option<&'a str>,
}

impl<'a> Selection<'a> {
    #[inline] pub fn is_none(&self) -> bool { self.ids.is_empty() }
    #[inline] pub fn is_all_brands(&self) -> bool { self.ids.len() == self.brands.len() }

    fn brand_names(&self) -> Vec<&'a str> {
        self.ids
            .iter()
            .filter_map(|id| self.brands.iter().find(|(bid, _)| bid == id))
            .map(|(_, name)| name.as_str())
            .collect()
    }
}

/// Zero-copy filtered view of the parts table.
/// Holds the positions of kept rows in the raw dataset.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a DataSet,
}

impl<'a> SelectionView<'a> {
    pub fn from_raw(raw: &'a RawData, sel: Selection<'_>) -> Self {
        let ds = raw.dataset();

        if sel.is_none() {
            return Self { row_ix: Vec::new(), raw: ds };
        }

        let all_brands = sel.is_all_brands();
        let names = if all_brands { Vec::new() } else { sel.brand_names() };

        let row_ix = ds
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                let brand_ok = all_brands
                    || r.get(BRAND_COL)
                        .map(|b| names.contains(&b.as_str()))
                        .unwrap_or(false);
                let cat_ok = match sel.category {
                    None => true,
                    Some(c) => r.get(CATEGORY_COL).map(|rc| rc == c).unwrap_or(false),
                };
                brand_ok && cat_ok
            })
            .map(|(i, _)| i)
            .collect();

        Self { row_ix, raw: ds }
    }

    /// Number of rows in the projection.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&[String]> {
        self.row_ix.get(i).and_then(|&ix| self.raw.rows.get(ix).map(|r| r.as_slice()))
    }

    /// Materialize owned rows (for UI/export boundaries).
    pub fn to_owned_rows(&self) -> Vec<Vec<String>> {
        self.row_ix.iter().map(|&ix| self.raw.rows[ix].clone()).collect()
    }
}
