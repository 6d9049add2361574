// src/gui/components/mod.rs
pub mod action_buttons;
pub mod bar_chart;
pub mod brand_panel;
pub mod data_table;
pub mod sparkline;
pub mod tabs;

use eframe::egui;

/// Color scale for brands, applied by list position (wraps past 20).
/// Same palette the dashboard chart has always used.
pub const BRAND_COLORS: [egui::Color32; 20] = [
    egui::Color32::from_rgb(0xe4, 0x1a, 0x1c), // Red
    egui::Color32::from_rgb(0x37, 0x7e, 0xb8), // Blue
    egui::Color32::from_rgb(0x4d, 0xaf, 0x4a), // Green
    egui::Color32::from_rgb(0x98, 0x4e, 0xa3), // Purple
    egui::Color32::from_rgb(0xff, 0x7f, 0x00), // Orange
    egui::Color32::from_rgb(0xff, 0xff, 0x33), // Yellow
    egui::Color32::from_rgb(0xa6, 0x56, 0x28), // Brown
    egui::Color32::from_rgb(0xf7, 0x81, 0xbf), // Pink
    egui::Color32::from_rgb(0x00, 0xff, 0xff), // Cyan
    egui::Color32::from_rgb(0x80, 0x80, 0x80), // Gray
    egui::Color32::from_rgb(0x8d, 0xd3, 0xc7), // Mint
    egui::Color32::from_rgb(0xbe, 0xba, 0xda), // Periwinkle
    egui::Color32::from_rgb(0xfb, 0x80, 0x72), // Salmon
    egui::Color32::from_rgb(0x80, 0xb1, 0xd3), // Light Blue
    egui::Color32::from_rgb(0xfd, 0xb4, 0x62), // Light Orange
    egui::Color32::from_rgb(0xb3, 0xde, 0x69), // Light Green
    egui::Color32::from_rgb(0xfc, 0xcd, 0xe5), // Light Pink
    egui::Color32::from_rgb(0xbc, 0x80, 0xbd), // Light Purple
    egui::Color32::from_rgb(0xcc, 0xeb, 0xc5), // Pale Green
    egui::Color32::from_rgb(0xff, 0xed, 0x6f), // Light Yellow
];

pub fn brand_color(brands: &[(u32, String)], name: &str) -> egui::Color32 {
    let ix = brands
        .iter()
        .position(|(_, n)| n == name)
        .unwrap_or(brands.len());
    BRAND_COLORS[ix % BRAND_COLORS.len()]
}
