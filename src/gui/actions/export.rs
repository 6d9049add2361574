// src/gui/actions/export.rs
use crate::{
    config::options::ExportType,
    file,
    gui::app::App,
};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let page = app.current_page();
    let kind = app.current_page_kind();
    let export = &app.state.options.export;

    if app.rows.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let (headers, rows) = page.view_for_export(&app.headers, &app.rows);
    let price_cols = page.price_columns();

    let status_msg = match export.export_type {
        ExportType::SingleFile => {
            logf!(
                "Export: Begin page={:?}, rows={}, headers={}, type=SingleFile",
                kind,
                rows.len(),
                headers.as_ref().map(|hh| hh.len()).unwrap_or(0)
            );

            match file::write_export_single(export, &headers, &rows, price_cols) {
                Ok(path) => {
                    logf!("Export: OK count=1 last={}", path.display());
                    format!("Exported 1 file. Last: {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }

        ExportType::PerBrand => {
            logf!(
                "Export: Begin page={:?}, rows={}, type=PerBrand",
                kind,
                rows.len()
            );

            match file::write_export_per_brand(export, &headers, &rows, price_cols) {
                Ok(written) if written.is_empty() => {
                    logd!("Export: PerBrand produced no files (no rows for chosen brands)");
                    s!("Nothing to export")
                }
                Ok(written) => {
                    let last = written.last().cloned();
                    match last {
                        Some(p) => {
                            logf!("Export: OK count={} last={}", written.len(), p.display());
                            format!("Exported {} file(s). Last: {}", written.len(), p.display())
                        }
                        None => format!("Exported {} file(s).", written.len()),
                    }
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    app.status(status_msg);
}
