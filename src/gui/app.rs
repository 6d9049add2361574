// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        atomic::AtomicBool,
        mpsc::{self, Receiver, Sender},
        Arc, Mutex,
    },
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{
        options::{BrandSelector, PageKind},
        state::{AppState, GuiState, SortOrder},
    },
    data::{RawData, Selection, SelectionView},
    scrape,
    stats::{self, BrandSummary, PriceStat},
    store,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Car Parts Price Tracker",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Results flowing back from scrape worker threads to the UI thread.
pub enum ScrapeEvent {
    /// One completed scrape pass (one-shot button or background loop).
    Pass(store::DataSet),
    Failed(String),
    ScraperStopped,
}

/// Handle to the background scraper loop thread.
pub struct ScraperHandle {
    pub stop: Arc<AtomicBool>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // brands & selection UI (selection lives inside state.gui)
    pub brands: Vec<(u32, String)>,
    pub last_clicked: Option<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // canonical parts data + current page's display table
    pub parts: RawData,
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    /// Parts-page projection: indices into the raw dataset
    pub row_ix: Vec<usize>,

    // derived stats for the Overview chart and Brand Stats sparklines
    pub price_stats: Vec<PriceStat>,
    pub brand_summaries: Vec<BrandSummary>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    /// A scrape pass is in flight
    pub running: bool,
    /// Background scraper loop, when started
    pub scraper: Option<ScraperHandle>,

    // worker → UI handoff
    pub events_tx: Sender<ScrapeEvent>,
    events_rx: Receiver<ScrapeEvent>,

    // brand management UI
    pub add_brand_text: String,
    pub confirm_delete: Option<String>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let brands = scrape::list_brands();

        // Default selection: all
        state.gui = GuiState {
            selected_brand_ids: brands.iter().map(|(id, _)| *id).collect(),
            ..GuiState::default()
        };

        // First tab is Overview; align the export default dir with it.
        state.options.export.set_default_dir_for_page(PageKind::Overview);

        let mut status = s!("Idle");

        let parts = match store::load_parts() {
            Ok(ds) if !ds.is_empty() => {
                if store::validate_parts(&ds) {
                    logf!("Cache: Loaded parts (rows={}, headers={})",
                        ds.row_count(), ds.header_count());
                    status = s!("Loaded local data");
                    RawData::new(ds)
                } else {
                    loge!("Cache: Invalid shape for parts dataset, ignoring");
                    RawData::default()
                }
            }
            Ok(_) => {
                logd!("Cache: parts dataset is empty");
                RawData::default()
            }
            Err(e) => {
                logd!("Cache: Missing parts dataset ({})", e);
                RawData::default()
            }
        };

        logf!("Init: brands={}, default page={:?}", brands.len(), PageKind::Overview);

        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let (events_tx, events_rx) = mpsc::channel();

        let mut app = Self {
            state,
            brands,
            last_clicked: None,
            out_path_text,
            out_path_dirty: false,
            parts,
            headers: None,
            rows: Vec::new(),
            row_ix: Vec::new(),
            price_stats: Vec::new(),
            brand_summaries: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            scraper: None,
            events_tx,
            events_rx,
            add_brand_text: s!(),
            confirm_delete: None,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { router::all_pages()[self.current_index()].kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn set_selection_message(&self) {
        let n = self.state.gui.selected_brand_ids.len();
        self.status(format!("Selection: {} brand(s)", n));
    }

    pub fn scraper_active(&self) -> bool {
        self.scraper.is_some()
    }

    /// Mirror GUI selection → options.scrape.brands
    pub fn sync_gui_selection_into_scrape(&mut self) {
        let total = self.brands.len();
        let sel = &self.state.gui.selected_brand_ids;

        self.state.options.scrape.brands = if sel.is_empty() {
            BrandSelector::Ids(Vec::new())
        } else if sel.len() == total {
            BrandSelector::All
        } else if sel.len() == 1 {
            BrandSelector::One(sel[0])
        } else {
            let mut v = sel.clone();
            v.sort_unstable();
            v.dedup();
            BrandSelector::Ids(v)
        };
    }

    /* ---------- derived views ---------- */

    /// Rebuild the current tab's table (and derived stats) from the
    /// canonical parts dataset + selection + category filter.
    pub fn rebuild_view(&mut self) {
        let sel = Selection {
            ids: &self.state.gui.selected_brand_ids,
            brands: &self.brands,
            category: self.state.gui.category_filter.as_deref(),
        };
        let view = SelectionView::from_raw(&self.parts, sel);
        self.row_ix = view.row_ix.clone();

        let page = self.current_page();
        let headers = page
            .default_headers()
            .map(|hs| hs.iter().map(|h| s!(*h)).collect::<Vec<String>>());

        match page.kind() {
            PageKind::Parts => {
                self.headers = self
                    .parts
                    .dataset()
                    .headers
                    .clone()
                    .or(headers);
                self.rows = view.to_owned_rows();
            }
            PageKind::Overview => {
                let filtered = view.to_owned_rows();
                let mut ps = stats::price_stats(&filtered);
                match self.state.gui.sort_order {
                    SortOrder::Ascending => ps.sort_by(|a, b| a.avg.total_cmp(&b.avg)),
                    SortOrder::Descending => ps.sort_by(|a, b| b.avg.total_cmp(&a.avg)),
                }
                self.headers = headers;
                self.rows = ps
                    .iter()
                    .map(|st| {
                        vec![
                            st.brand.clone(),
                            st.category.clone(),
                            format!("{:.2}", st.avg),
                            format!("{:.2}", st.min),
                            format!("{:.2}", st.max),
                            st.retailers.to_string(),
                        ]
                    })
                    .collect();
                self.price_stats = ps;
            }
            PageKind::BrandStats => {
                let filtered = view.to_owned_rows();
                let summaries = stats::brand_stats(&filtered);
                self.headers = headers;
                self.rows = summaries
                    .iter()
                    .map(|bs| {
                        vec![
                            bs.brand.clone(),
                            format!("{:.2}", bs.average),
                            bs.total_parts.to_string(),
                            s!(), // painted sparkline cell
                        ]
                    })
                    .collect();
                self.brand_summaries = summaries;
            }
        }
    }

    /* ---------- brand management ---------- */

    pub fn add_brand(&mut self) {
        let name = self.add_brand_text.trim().to_string();
        match crate::brands::add(&name) {
            Ok(list) => {
                // select the newly added brand along with the rest
                if let Some((id, _)) = list.iter().find(|(_, n)| n == &name) {
                    self.state.gui.selected_brand_ids.push(*id);
                }
                self.brands = list;
                self.add_brand_text.clear();
                self.sync_gui_selection_into_scrape();
                self.rebuild_view();
                logf!("Brands: Added {}", name);
                self.status(format!("Added brand {}", name));
            }
            Err(e) => {
                loge!("Brands: Add failed: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Delete a brand and cascade to its part rows (confirmed beforehand).
    pub fn delete_brand(&mut self, name: &str) {
        match crate::brands::remove(name) {
            Ok(list) => {
                let keep: Vec<u32> = self
                    .state
                    .gui
                    .selected_brand_ids
                    .iter()
                    .copied()
                    .filter(|id| list.iter().any(|(bid, _)| bid == id))
                    .collect();
                self.state.gui.selected_brand_ids = keep;
                self.brands = list;

                let dropped = self.parts.remove_brand(name);
                if dropped > 0 {
                    match self.parts.save() {
                        Ok(p) => logf!("Cache: Saved parts → {}", p.display()),
                        Err(e) => loge!("Cache: Save failed: {}", e),
                    }
                }

                self.sync_gui_selection_into_scrape();
                self.rebuild_view();
                logf!("Brands: Deleted {} ({} part rows dropped)", name, dropped);
                self.status(format!("Deleted brand {}", name));
            }
            Err(e) => {
                loge!("Brands: Delete failed: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }

    /* ---------- worker events ---------- */

    fn drain_events(&mut self) {
        while let Ok(ev) = self.events_rx.try_recv() {
            match ev {
                ScrapeEvent::Pass(new_ds) => {
                    logf!(
                        "Scrape: Pass complete, rows={} headers={}",
                        new_ds.row_count(),
                        new_ds.header_count()
                    );
                    self.parts.merge_from_scrape(new_ds);
                    match self.parts.save() {
                        Ok(p) => logf!("Cache: Saved parts → {}", p.display()),
                        Err(e) => loge!("Cache: Save failed: {}", e),
                    }
                    self.running = false;
                    self.rebuild_view();
                    self.status("Ready");
                }
                ScrapeEvent::Failed(msg) => {
                    loge!("Scrape: Error: {}", msg);
                    self.running = false;
                    self.status(format!("Error: {msg}"));
                }
                ScrapeEvent::ScraperStopped => {
                    logf!("Scraper: Stopped");
                    self.scraper = None;
                    self.status("Scraper stopped");
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        // Keep polling for worker results while anything is running.
        if self.running || self.scraper_active() {
            ctx.request_repaint_after(Duration::from_millis(500));
        }

        egui::SidePanel::left("brands")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::brand_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::action_buttons::draw(ui, self);

            ui.separator();

            if self.current_page_kind() == PageKind::Overview {
                super::components::bar_chart::draw(ui, self);
                ui.separator();
            }

            super::components::data_table::draw(ui, self);
        });

        // Brand-deletion confirmation (the web UI used window.confirm)
        if let Some(name) = self.confirm_delete.clone() {
            egui::Window::new("Delete brand")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(format!(
                        "Delete {} and all of its scraped parts?", name
                    ));
                    ui.horizontal(|ui| {
                        if ui.button("Delete").clicked() {
                            self.delete_brand(&name);
                            self.confirm_delete = None;
                        }
                        if ui.button("Cancel").clicked() {
                            self.confirm_delete = None;
                        }
                    });
                });
        }
    }
}
