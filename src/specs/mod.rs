// src/specs/mod.rs
//! # Retailer "specs" module
//!
//! This module hosts the **retailer-specific scraping specifications**.
//! Each spec focuses on a single retailer's search-results page and encodes
//! *where the ground truth lives in the HTML* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of search-result pages into [`Listing`] values.
//! - **Selector choice** per retailer (product-tile container, title anchor,
//!   price element), expressed with the `core::html` block scanners.
//! - **Price normalization** via `core::sanitize::parse_price`; listings that
//!   come out non-positive are dropped at the source.
//!
//! ## What does **not** live here
//! - **Caching/persistence** (`store::*`) — handled by `scrape::collect_parts`.
//! - **GUI concerns, filtering, or export formatting.**
//! - **Aggregation** — averages and histograms live in `stats`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::collect_parts → specs::<retailer>::fetch(brand, part)
//!                                   ↘ returns Vec<Listing>
//!                     store::save_dataset (outside of specs)
//! ```
//!
//! ## Conventions & invariants
//! - **Case-insensitive** tag detection; no full-document regexes.
//! - Prefer **local scanning within known blocks** (one product tile at a time).
//! - Relative product links are made absolute against the retailer base URL.
//! - Specs must be testable **offline** against captured HTML fixtures.

pub mod africaboyz;
pub mod onlinecarparts;

/// One product hit on a retailer search page.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub name: String,
    pub price: f64,
    pub url: String,
}
