// src/stats/mod.rs
//
// Pure aggregation over the canonical parts table. No I/O, no UI: the GUI
// and CLI both render whatever comes out of here.

pub mod histogram;
pub mod summary;

pub use histogram::{bin_prices, HistogramBin};
pub use summary::{brand_stats, price_stats, BrandSummary, PriceStat};
