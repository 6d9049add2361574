// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::consts::COMMON_PARTS;
use crate::config::options::PageKind;
use crate::config::state::AppState;

pub mod brand_stats;
pub mod overview;
pub mod parts;

/// One tab of the dashboard. Pages are static metadata + small control
/// hooks; the table contents themselves are derived centrally in
/// `App::rebuild_view` from the canonical parts dataset.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Headers shown before any data exists.
    fn default_headers(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Non-numeric columns for alignment: names, categories, links
    fn non_numeric_columns(&self) -> &'static [usize] { &[] }

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { None }

    /// Columns holding plain decimal prices (export currency toggle).
    fn price_columns(&self) -> &'static [usize] { &[] }

    /// Whether "one file per brand" export makes sense on this page.
    fn per_brand_applicable(&self) -> bool { false }

    /// Draw page-specific controls above the table.
    /// Returns true when a change requires a view rebuild.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool {
        false
    }

    /// Optional: transform headers/rows for export/copy (e.g. hide columns)
    fn view_for_export(
        &self,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        // default: pass-through
        (headers.clone(), rows.to_vec())
    }
}

/// Category filter dropdown shared by the Overview and Parts tabs.
/// Returns true when the filter changed.
pub fn category_combo(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut changed = false;
    let current = state
        .gui
        .category_filter
        .clone()
        .unwrap_or_else(|| s!("All categories"));

    egui::ComboBox::from_label("Category")
        .selected_text(current)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(state.gui.category_filter.is_none(), "All categories")
                .clicked()
            {
                changed |= state.gui.category_filter.take().is_some();
            }
            for cat in COMMON_PARTS {
                let selected = state.gui.category_filter.as_deref() == Some(cat);
                if ui.selectable_label(selected, cat).clicked() && !selected {
                    state.gui.category_filter = Some(s!(cat));
                    changed = true;
                }
            }
        });

    changed
}
