// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {

    if app.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let page = app.current_page();
    let export = &app.state.options.export;

    let (h, r) = page.view_for_export(&app.headers, &app.rows);
    logf!(
        "Copy: page={:?}, rows={}, headers={}",
        page.kind(),
        r.len(),
        h.as_ref().map(|x| x.len()).unwrap_or(0)
    );

    let txt = csv::to_export_string(
        &h,
        &r,
        export.include_headers,
        export.show_currency,
        page.price_columns(),
        export.delimiter(),
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
