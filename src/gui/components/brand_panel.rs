// src/gui/components/brand_panel.rs
//
// Renders the left brand list and applies selection changes directly to
// `app`. Handles ctrl/shift range behavior, per-brand delete, and the
// add-brand field at the bottom.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Brands");

    // Apply current selection → scrape options, rebuild table, set status.
    let apply_selection_change = |app: &mut App| {
        app.sync_gui_selection_into_scrape();
        app.rebuild_view();

        // Don't overwrite progress messages with selection info
        if !app.running {
            app.set_selection_message();
        }
    };

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_brand_ids = app.brands.iter().map(|(id, _)| *id).collect();
            apply_selection_change(app);
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_brand_ids.clear();
            apply_selection_change(app);
        }
    });

    ui.separator();

    // Reserve space at the bottom for the add-brand controls.
    let list_h = ui.available_height() - 70.0;

    egui::ScrollArea::vertical()
        .id_salt("brand_panel_scroll")
        .max_height(list_h)
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            let mut changed = false;
            let mut delete_request: Option<String> = None;

            for (idx, (id, name)) in app.brands.iter().enumerate() {
                let is_selected = app.state.gui.selected_brand_ids.contains(id);

                let mut clicked = false;
                ui.horizontal(|ui| {
                    clicked = ui.selectable_label(is_selected, name).clicked();
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").on_hover_text("Delete brand").clicked() {
                            delete_request = Some(name.clone());
                        }
                    });
                });

                if clicked && !app.running {
                    let input = ui.input(|i| i.clone());
                    let sel = &mut app.state.gui.selected_brand_ids;
                    let ctrl = input.modifiers.ctrl;
                    let shift = input.modifiers.shift;

                    if ctrl && shift {
                        if let Some(last) = app.last_clicked {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            for j in lo..=hi {
                                let bid = app.brands[j].0;
                                if !sel.contains(&bid) { sel.push(bid); }
                            }
                            app.last_clicked = Some(idx);
                        } else {
                            // No anchor: fall back to ctrl-toggle on single item
                            if is_selected { sel.retain(|x| x != id); } else { sel.push(*id); }
                            app.last_clicked = Some(idx);
                        }
                    } else if ctrl {
                        if is_selected { sel.retain(|x| x != id); } else { sel.push(*id); }
                        app.last_clicked = Some(idx);
                    } else if shift {
                        if let Some(last) = app.last_clicked {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            sel.clear();
                            for j in lo..=hi { sel.push(app.brands[j].0); }
                            app.last_clicked = Some(idx);
                        } else {
                            // No anchor: behave like single click
                            sel.clear();
                            sel.push(*id);
                            app.last_clicked = Some(idx);
                        }
                    } else {
                        sel.clear();
                        sel.push(*id);
                        app.last_clicked = Some(idx);
                    }
                    changed = true;
                }
            }

            if changed {
                apply_selection_change(app);
                logf!(
                    "UI: Selection changed ({} brands) — {:?}",
                    app.state.gui.selected_brand_ids.len(),
                    &app.state.gui.selected_brand_ids
                );
            }

            if let Some(name) = delete_request {
                // Confirm first; the web UI asked too, and deletion cascades.
                app.confirm_delete = Some(name);
            }
        });

    ui.separator();

    ui.label("Add brand:");
    ui.horizontal(|ui| {
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.add_brand_text)
                .hint_text("Brand name")
                .desired_width(ui.available_width() - 48.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("Add").clicked() || submitted) && !app.add_brand_text.trim().is_empty() {
            app.add_brand();
        }
    });
}
