// src/gui/pages/parts.rs
use eframe::egui;

use crate::config::consts::{PARTS_HEADERS, PRICE_COL};
use crate::config::options::PageKind;
use crate::config::state::AppState;

use super::Page;

pub struct PartsPage;
pub static PAGE: PartsPage = PartsPage;

impl Page for PartsPage {
    fn title(&self) -> &'static str { "Detailed Prices" }
    fn kind(&self) -> PageKind { PageKind::Parts }

    fn default_headers(&self) -> Option<&'static [&'static str]> { Some(&PARTS_HEADERS) }

    // Part, Brand, Category, Retailer, URL
    fn non_numeric_columns(&self) -> &'static [usize] { &[0, 1, 2, 3, 6] }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[260, 110, 110, 130, 90, 90, 60])
    }

    fn price_columns(&self) -> &'static [usize] { &[PRICE_COL] }

    fn per_brand_applicable(&self) -> bool { true }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= super::category_combo(ui, state);
        });
        changed
    }
}
