// src/scrape/scrape.rs
use std::{
    error::Error, thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicBool, AtomicUsize, Ordering }}
};

use crate::{
    brands,
    config::consts::{ COMMON_PARTS, DEFAULT_BRANDS, JITTER_MS, REQUEST_PAUSE_MS, WORKERS },
    config::options::{ BrandSelector, ScrapeOptions },
    core::datefmt,
    progress::Progress,
    specs::{ self, Listing },
    store::{ self, DataSet },
};

/// One search job: a brand crossed with a part category. Every job queries
/// all retailers.
#[derive(Clone, Debug)]
struct Job {
    brand: String,
    category: &'static str,
}

fn resolve_ids(sel: &BrandSelector, brands: &[(u32, String)]) -> Vec<u32> {
    match sel {
        BrandSelector::All     => brands.iter().map(|(id, _)| *id).collect(),
        BrandSelector::One(id) => vec![*id],
        BrandSelector::Ids(v)  => v.clone(),
    }
}

pub fn list_brands() -> Vec<(u32, String)> {
    match brands::load() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Warning: could not load brand list: {}", e);
            DEFAULT_BRANDS
                .iter()
                .enumerate()
                .map(|(i, name)| (i as u32, s!(*name)))
                .collect()
        }
    }
}

/// Collect part listings into memory according to selection.
/// Always returns canonical base data: headers present; prices as plain
/// decimals. `stop` is checked between jobs so a background scraper can be
/// interrupted without waiting out the whole grid.
pub fn collect_parts(
    scrape: &ScrapeOptions,
    brand_list: &[(u32, String)],
    mut progress: Option<&mut dyn Progress>,
    stop: Arc<AtomicBool>,
) -> Result<DataSet, Box<dyn Error>> {

    let ids = resolve_ids(&scrape.brands, brand_list);

    // Job grid: selected brands × common part categories
    let mut jobs: Vec<Job> = Vec::with_capacity(ids.len() * COMMON_PARTS.len());
    for id in &ids {
        let Some((_, name)) = brand_list.iter().find(|(bid, _)| bid == id) else { continue };
        for category in COMMON_PARTS {
            jobs.push(Job { brand: name.clone(), category });
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(jobs.len());
    }

    // Concurrency
    type FetchOk = (usize, Vec<Vec<String>>);
    type FetchErr = (usize, String);

    let jobs_arc = Arc::new(jobs);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(jobs_arc.len()).max(1);

    // Spawn workers

    for _ in 0..workers {
        let jobs = Arc::clone(&jobs_arc);
        let idx = Arc::clone(&counter);
        let stop = Arc::clone(&stop);
        let tx = res_tx.clone();

        thread::spawn(
            move || {
                loop {
                    if stop.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= jobs.len() {
                        break;
                    }
                    let job = &jobs[i];
                    let result = match run_job(job) {
                        Ok(rows) => Ok((i, rows)),
                        Err(e) => Err((i, e.to_string())),
                    };
                    let _ = tx.send(result);
                    let jitter = (i as u64 * 31) % JITTER_MS;
                    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                }
            }
        );
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut per_job: Vec<(usize, Vec<Vec<String>>)> = Vec::new();

    for _ in 0..jobs_arc.len() {
        match res_rx.recv() {
            Ok(Ok((i, rows))) => {
                if let Some(p) = progress.as_deref_mut() {
                    let job = &jobs_arc[i];
                    p.item_done(&format!("{} {}", job.brand, job.category));
                }
                per_job.push((i, rows));
            }
            Ok(Err((i, msg))) => {
                if let Some(p) = progress.as_deref_mut() {
                    let job = &jobs_arc[i];
                    p.item_failed(&format!("{} {}", job.brand, job.category));
                    loge!("Scrape: {} {}: {msg}", job.brand, job.category);
                }
            }
            Err(_) => break, // workers ended early (stop or exhaustion); bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Deterministic row order regardless of worker scheduling
    per_job.sort_by_key(|(i, _)| *i);
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (_, mut job_rows) in per_job {
        rows.append(&mut job_rows);
    }

    Ok(DataSet { headers: Some(store::parts_headers()), rows })
}

/// Query every retailer for one brand+category and shape the hits into
/// canonical parts rows. Fails only when *all* retailers error out.
fn run_job(job: &Job) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let today = datefmt::now_date();
    let mut rows = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    let fetched: [(&str, Result<Vec<Listing>, Box<dyn Error>>); 2] = [
        (specs::onlinecarparts::NAME, specs::onlinecarparts::fetch(&job.brand, job.category)),
        (specs::africaboyz::NAME, specs::africaboyz::fetch(&job.brand, job.category)),
    ];

    for (retailer, result) in fetched {
        match result {
            Ok(listings) => {
                for l in listings {
                    rows.push(listing_row(&l, &job.brand, job.category, retailer, &today));
                }
            }
            Err(e) => errors.push(format!("{retailer}: {e}")),
        }
    }

    if rows.is_empty() && !errors.is_empty() {
        return Err(errors.join("; ").into());
    }
    Ok(rows)
}

fn listing_row(l: &Listing, brand: &str, category: &str, retailer: &str, today: &str) -> Vec<String> {
    vec![
        l.name.clone(),
        s!(brand),
        s!(category),
        s!(retailer),
        format!("{:.2}", l.price),
        s!(today),
        l.url.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::PARTS_HEADERS;

    #[test]
    fn listing_row_matches_canonical_shape() {
        let l = Listing {
            name: s!("MANN Oil Filter"),
            price: 189.0,
            url: s!("https://example/p/1"),
        };
        let row = listing_row(&l, "Toyota", "oil filter", "Online Car Parts", "2026-08-06");
        assert_eq!(row.len(), PARTS_HEADERS.len());
        assert_eq!(row[1], "Toyota");
        assert_eq!(row[4], "189.00");
    }

    #[test]
    fn resolve_ids_variants() {
        let brands = vec![(0, s!("Toyota")), (1, s!("Ford")), (5, s!("BMW"))];
        assert_eq!(resolve_ids(&BrandSelector::All, &brands), vec![0, 1, 5]);
        assert_eq!(resolve_ids(&BrandSelector::One(1), &brands), vec![1]);
        assert_eq!(
            resolve_ids(&BrandSelector::Ids(vec![0, 5]), &brands),
            vec![0, 5]
        );
    }
}
