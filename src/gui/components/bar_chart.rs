// src/gui/components/bar_chart.rs
//
// Average-price bar chart for the Overview tab: one bar per
// (brand, category) aggregate, colored by brand, tooltip with the full
// stat line. Painter-drawn; no plotting crate in the stack.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::gui::app::App;

use super::brand_color;

const CHART_HEIGHT: f32 = 220.0;
const LEFT_GUTTER: f32 = 64.0;
const LABEL_BAND: f32 = 18.0;
const BAR_GAP: f32 = 4.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.price_stats.is_empty() {
        ui.weak("No price data to chart yet.");
        return;
    }

    let width = ui.available_width();
    let (rect, resp) = ui.allocate_exact_size(Vec2::new(width, CHART_HEIGHT), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + LEFT_GUTTER, rect.top() + 4.0),
        Pos2::new(rect.right() - 4.0, rect.bottom() - LABEL_BAND),
    );

    let max_avg = app
        .price_stats
        .iter()
        .map(|s| s.avg)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let painter = ui.painter();
    let grid = ui.visuals().weak_text_color();
    let text_color = ui.visuals().text_color();

    // Horizontal gridlines + rand labels (0%, 25%, ..., 100% of max)
    for step in 0..=4 {
        let frac = step as f32 / 4.0;
        let y = plot.bottom() - frac * plot.height();
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(0.5, grid),
        );
        painter.text(
            Pos2::new(rect.left() + LEFT_GUTTER - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("R {:.0}", max_avg * frac as f64),
            FontId::proportional(10.0),
            grid,
        );
    }

    let n = app.price_stats.len() as f32;
    let bar_w = ((plot.width() - BAR_GAP * (n - 1.0)) / n).max(2.0);

    let mut hovered: Option<usize> = None;

    for (i, stat) in app.price_stats.iter().enumerate() {
        let x = plot.left() + i as f32 * (bar_w + BAR_GAP);
        let h = (stat.avg / max_avg) as f32 * plot.height();
        let bar = Rect::from_min_max(
            Pos2::new(x, plot.bottom() - h),
            Pos2::new(x + bar_w, plot.bottom()),
        );

        let color = brand_color(&app.brands, &stat.brand);
        painter.rect_filled(bar, 2.0, color);

        if let Some(pos) = resp.hover_pos() {
            if pos.x >= bar.left() && pos.x <= bar.right() && plot.contains(pos) {
                hovered = Some(i);
                painter.rect_stroke(
                    bar,
                    2.0,
                    Stroke::new(1.5, text_color),
                    egui::StrokeKind::Outside,
                );
            }
        }

        // Brand label under the bar when there's room for it
        if bar_w >= 36.0 {
            painter.text(
                Pos2::new(x + bar_w / 2.0, rect.bottom() - LABEL_BAND / 2.0),
                Align2::CENTER_CENTER,
                truncate(&stat.brand, (bar_w / 7.0) as usize),
                FontId::proportional(10.0),
                text_color,
            );
        }
    }

    // Baseline
    painter.line_segment(
        [Pos2::new(plot.left(), plot.bottom()), Pos2::new(plot.right(), plot.bottom())],
        Stroke::new(1.0, text_color),
    );

    if let Some(i) = hovered {
        let stat = &app.price_stats[i];
        resp.on_hover_ui(|ui| {
            ui.strong(&stat.brand);
            ui.label(&stat.category);
            ui.label(join!("Average: ", &rand_fmt!(stat.avg)));
            ui.label(join!("Min: ", &rand_fmt!(stat.min)));
            ui.label(join!("Max: ", &rand_fmt!(stat.max)));
            ui.label(format!("Retailers: {}", stat.retailers));
        });
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars.max(2) {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.max(2).saturating_sub(1)).collect();
        join!(cut, "…")
    }
}
