// src/gui/components/data_table.rs
//
// Draws the live table for the current tab. Fills headers from page
// defaults if None. Purely a view over App's display rows; the painted
// extras (URL links, distribution sparklines) key off the page kind.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::URL_COL;
use crate::config::options::PageKind;
use crate::gui::app::App;

use super::sparkline;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let kind = app.current_page_kind();

    // Prefer live headers; fall back to the page's known headers.
    let hdrs = app.headers.clone()
        .or_else(|| page.default_headers().map(|s| s.iter().map(|x| s!(*x)).collect()));
    app.headers = hdrs;

    let cols = app.headers.as_ref()
        .map(|h| h.len())
        .unwrap_or_else(|| page.default_headers().map(|h| h.len()).unwrap_or(0));
    if cols == 0 {
        ui.label("No data yet — hit SCRAPE.");
        return;
    }

    let widths: Vec<f32> = match page.preferred_column_widths() {
        Some(ws) => ws.iter().map(|&w| w as f32).collect(),
        None => vec![80.0; cols],
    };

    // Determine numeric columns from the Page's static hints.
    let non_numeric = page.non_numeric_columns();
    let numeric_cols: Vec<bool> = (0..cols)
        .map(|ci| !non_numeric.contains(&ci))
        .collect();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", kind));
            for ci in 0..cols {
                let w = widths.get(ci).copied().unwrap_or(80.0);
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let label_text = app.headers.as_ref()
                                    .and_then(|hs| hs.get(ci).cloned())
                                    .unwrap_or_else(|| format!("Col {}", ci + 1));
                                let label = egui::Label::new(
                                    RichText::new(label_text).strong()).selectable(false);
                                if numeric_cols.get(ci).copied().unwrap_or(false) {
                                    ui.centered_and_justified(|ui| { ui.add(label); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.add(label);
                                    });
                                }
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.rows.len(), |mut row| {
                        let row_idx = row.index();
                        let Some(data) = app.rows.get(row_idx) else { return };

                        for ci in 0..cols {
                            let cell_opt = data.get(ci);
                            row.col(|ui| {
                                ui.scope(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

                                    // Brand Stats → painted histogram sparkline
                                    if kind == PageKind::BrandStats && ci == 3 {
                                        if let Some(summary) = app.brand_summaries.get(row_idx) {
                                            sparkline::draw_bins(ui, &summary.bins);
                                        }
                                        return;
                                    }

                                    // Parts → clickable retailer link
                                    if kind == PageKind::Parts && ci == URL_COL {
                                        if let Some(url) = cell_opt {
                                            if !url.is_empty() {
                                                ui.hyperlink_to("open", url)
                                                    .on_hover_text(url);
                                            }
                                        }
                                        return;
                                    }

                                    if let Some(cell) = cell_opt {
                                        if numeric_cols.get(ci).copied().unwrap_or(false) {
                                            ui.centered_and_justified(|ui| { ui.label(cell); });
                                        } else {
                                            ui.with_layout(
                                                Layout::left_to_right(Align::Center), |ui| {
                                                    ui.label(cell);
                                                });
                                        }
                                    }
                                });
                            });
                        }
                    });
                });
        });
}
