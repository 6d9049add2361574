// src/gui/components/sparkline.rs
//
// Tiny in-cell histogram: ten bars sized by normalized count. Hovering a
// bar surfaces its price range and sample count.

use eframe::egui::{self, Sense, Vec2};

use crate::stats::HistogramBin;

const BAR_GAP: f32 = 1.0;
const HEIGHT: f32 = 15.0;

pub fn draw_bins(ui: &mut egui::Ui, bins: &[HistogramBin]) {
    if bins.is_empty() {
        ui.weak("–");
        return;
    }

    let width = ui.available_width().clamp(60.0, 150.0);
    let (rect, resp) = ui.allocate_exact_size(Vec2::new(width, HEIGHT), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let n = bins.len() as f32;
    let bar_w = (rect.width() - BAR_GAP * (n - 1.0)) / n;
    let fill = ui.visuals().selection.bg_fill;
    let faint = ui.visuals().weak_text_color();
    let painter = ui.painter();

    for bin in bins {
        let x = rect.left() + bin.index as f32 * (bar_w + BAR_GAP);
        let h = (bin.normalized as f32 * rect.height()).max(0.0);
        if bin.count > 0 {
            let bar = egui::Rect::from_min_max(
                egui::pos2(x, rect.bottom() - h.max(1.0)),
                egui::pos2(x + bar_w, rect.bottom()),
            );
            painter.rect_filled(bar, 0.0, fill);
        } else {
            // baseline tick so empty bins still read as part of the scale
            let tick = egui::Rect::from_min_max(
                egui::pos2(x, rect.bottom() - 1.0),
                egui::pos2(x + bar_w, rect.bottom()),
            );
            painter.rect_filled(tick, 0.0, faint);
        }
    }

    if let Some(pos) = resp.hover_pos() {
        let rel = ((pos.x - rect.left()) / (bar_w + BAR_GAP)) as usize;
        if let Some(bin) = bins.get(rel.min(bins.len() - 1)) {
            resp.on_hover_text(format!(
                "{} – {}: {} part(s)",
                rand_fmt!(bin.range_start),
                rand_fmt!(bin.range_end),
                bin.count
            ));
        }
    }
}
