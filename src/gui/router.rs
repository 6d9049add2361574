// src/gui/router.rs
use crate::config::options::PageKind::{ self, * };
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::overview::PAGE,
    &pages::parts::PAGE,
    &pages::brand_stats::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        Overview   => &pages::overview::PAGE,
        Parts      => &pages::parts::PAGE,
        BrandStats => &pages::brand_stats::PAGE,
    }
}
