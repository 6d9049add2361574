// src/config/state.rs
use super::options::AppOptions;

/// Overview table sort direction (average price column).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Which brands are selected in the left panel
    pub selected_brand_ids: Vec<u32>,

    /// Category filter; None = all categories
    pub category_filter: Option<String>,

    pub sort_order: SortOrder,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_brand_ids: Vec::new(),
            category_filter: None,
            sort_order: SortOrder::Ascending,
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
