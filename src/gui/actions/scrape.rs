// src/gui/actions/scrape.rs
//
// Scraping never blocks the UI thread: both the one-shot SCRAPE button and
// the background scraper loop run in worker threads and hand results back
// over the app's event channel, which update() drains each frame.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use crate::{
    config::consts::{SCRAPE_INTERVAL_SECS, SCRAPE_SLEEP_SLICE_MS},
    config::options::ScrapeOptions,
    gui::app::{App, ScrapeEvent, ScraperHandle},
    gui::progress::GuiProgress,
    scrape,
};

/// One scrape pass, now, for the current selection.
pub fn scrape(app: &mut App) {
    if app.running {
        return;
    }

    app.sync_gui_selection_into_scrape();
    logf!("Scrape: Begin one-shot, brands={:?}", app.state.options.scrape.brands);

    app.running = true;
    app.status("Scraping…");

    let opts = app.state.options.scrape.clone();
    let brand_list = app.brands.clone();
    let tx = app.events_tx.clone();
    let mut prog = GuiProgress::new(app.status.clone());
    let stop = Arc::new(AtomicBool::new(false));

    thread::spawn(move || {
        let result = scrape::collect_parts(&opts, &brand_list, Some(&mut prog), stop);
        let _ = match result {
            Ok(ds) => tx.send(ScrapeEvent::Pass(ds)),
            Err(e) => tx.send(ScrapeEvent::Failed(e.to_string())),
        };
    });
}

/// Start or stop the background scraper (scrape everything, sleep six
/// hours, repeat). Mirrors the one-button start/stop the web dashboard had.
pub fn toggle_scraper(app: &mut App) {
    if let Some(handle) = app.scraper.take() {
        handle.stop.store(true, Ordering::Relaxed);
        // Thread exits on its own; ScraperStopped lands in the event queue.
        app.scraper = Some(handle); // keep handle until the stop event arrives
        app.status("Stopping scraper…");
        logf!("Scraper: Stop requested");
        return;
    }

    app.sync_gui_selection_into_scrape();

    let stop = Arc::new(AtomicBool::new(false));
    let opts = app.state.options.scrape.clone();
    let brand_list = app.brands.clone();
    let tx = app.events_tx.clone();
    let mut prog = GuiProgress::new(app.status.clone());
    let loop_stop = Arc::clone(&stop);

    thread::spawn(move || {
        loop {
            if loop_stop.load(Ordering::Relaxed) {
                break;
            }

            let result = scrape::collect_parts(
                &opts,
                &brand_list,
                Some(&mut prog),
                Arc::clone(&loop_stop),
            );
            match result {
                Ok(ds) => { let _ = tx.send(ScrapeEvent::Pass(ds)); }
                Err(e) => { let _ = tx.send(ScrapeEvent::Failed(e.to_string())); }
            }

            // Sleep out the interval in short slices so Stop stays responsive.
            let mut slept_ms: u64 = 0;
            while slept_ms < SCRAPE_INTERVAL_SECS * 1_000 {
                if loop_stop.load(Ordering::Relaxed) {
                    break;
                }
                thread::sleep(Duration::from_millis(SCRAPE_SLEEP_SLICE_MS));
                slept_ms += SCRAPE_SLEEP_SLICE_MS;
            }
        }
        let _ = tx.send(ScrapeEvent::ScraperStopped);
    });

    app.scraper = Some(ScraperHandle { stop });
    app.status("Scraper started");
    logf!("Scraper: Started (interval {}s)", SCRAPE_INTERVAL_SECS);
}
