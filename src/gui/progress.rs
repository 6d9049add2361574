// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", label, self.done, self.total));
    }
    fn item_failed(&mut self, label: &str) {
        self.failed += 1;
        self.set_status(format!("Failed {} ({} failed so far)", label, self.failed));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Scrape pass complete")); // no counts if we never began
        } else if self.failed > 0 {
            self.set_status(format!(
                "Scrape pass complete ({}/{}, {} failed)",
                self.done, self.total, self.failed
            ));
        } else {
            self.set_status(format!("Scrape pass complete ({}/{})", self.done, self.total));
        }
    }
}
