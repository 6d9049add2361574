// src/gui/pages/overview.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::{AppState, SortOrder};

use super::Page;

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

const HEADERS: [&str; 6] = [
    "Brand", "Category", "Average Price", "Min Price", "Max Price", "Retailers",
];

impl Page for OverviewPage {
    fn title(&self) -> &'static str { "Overview" }
    fn kind(&self) -> PageKind { PageKind::Overview }

    fn default_headers(&self) -> Option<&'static [&'static str]> { Some(&HEADERS) }

    fn non_numeric_columns(&self) -> &'static [usize] { &[0, 1] }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[140, 140, 110, 110, 110, 70])
    }

    fn price_columns(&self) -> &'static [usize] { &[2, 3, 4] }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= super::category_combo(ui, state);

            let arrow = match state.gui.sort_order {
                SortOrder::Ascending => "Average price ↑",
                SortOrder::Descending => "Average price ↓",
            };
            if ui.button(arrow).on_hover_text("Toggle sort direction").clicked() {
                state.gui.sort_order = state.gui.sort_order.flipped();
                changed = true;
            }
        });
        changed
    }
}
