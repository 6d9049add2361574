// src/gui/pages/brand_stats.rs
use crate::config::options::PageKind;

use super::Page;

pub struct BrandStatsPage;
pub static PAGE: BrandStatsPage = BrandStatsPage;

const HEADERS: [&str; 4] = ["Brand", "Average Price", "Parts", "Distribution"];

impl Page for BrandStatsPage {
    fn title(&self) -> &'static str { "Brand Stats" }
    fn kind(&self) -> PageKind { PageKind::BrandStats }

    fn default_headers(&self) -> Option<&'static [&'static str]> { Some(&HEADERS) }

    fn non_numeric_columns(&self) -> &'static [usize] { &[0, 3] }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[180, 120, 70, 160])
    }

    fn price_columns(&self) -> &'static [usize] { &[1] }

    /// The Distribution column is painted, not text; drop it from exports.
    fn view_for_export(
        &self,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        let h = headers.as_ref().map(|hs| {
            hs.iter().take(HEADERS.len() - 1).cloned().collect::<Vec<_>>()
        });
        let r = rows
            .iter()
            .map(|row| row.iter().take(HEADERS.len() - 1).cloned().collect())
            .collect();
        (h, r)
    }
}
