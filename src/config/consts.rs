// src/config/consts.rs

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';
pub const BRANDS_FILE: &str = ".store/brands.csv";
pub const PARTS_DATASET: &str = "parts";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_OVERVIEW_SUBDIR: &str = "overview";
pub const DEFAULT_PARTS_SUBDIR: &str = "parts";
pub const DEFAULT_BRANDS_SUBDIR: &str = "brands";
pub const DEFAULT_FILE: &str = "all";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 2_000; // be polite; search pages are heavy
pub const JITTER_MS: u64 = 250; // extra 0..250 ms

// Background scraper: refresh every 6 hours, wake often to honor Stop
pub const SCRAPE_INTERVAL_SECS: u64 = 6 * 60 * 60;
pub const SCRAPE_SLEEP_SLICE_MS: u64 = 500;

// Stats
pub const HISTOGRAM_BINS: usize = 10;

// Brands seeded into an empty store on first run
pub const DEFAULT_BRANDS: [&str; 10] = [
    "Toyota", "Volkswagen", "Ford", "Hyundai", "Nissan",
    "BMW", "Mercedes", "Audi", "Honda", "Mazda",
];

// Part categories searched per brand on every scrape pass
pub const COMMON_PARTS: [&str; 11] = [
    "oil filter", "air filter", "brake pads", "spark plugs",
    "fuel filter", "timing belt", "water pump", "radiator",
    "clutch kit", "shock absorber", "wheel bearing",
];

// Canonical parts dataset columns
pub const PARTS_HEADERS: [&str; 7] = [
    "Part", "Brand", "Category", "Retailer", "Price", "Updated", "URL",
];
pub const PART_COL: usize = 0;
pub const BRAND_COL: usize = 1;
pub const CATEGORY_COL: usize = 2;
pub const RETAILER_COL: usize = 3;
pub const PRICE_COL: usize = 4;
pub const UPDATED_COL: usize = 5;
pub const URL_COL: usize = 6;
