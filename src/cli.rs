// src/cli.rs
//
// Headless access to the same pipeline the GUI drives: scrape once,
// print aggregates, export CSV/TSV. No argument-parsing crate; flags are
// matched by hand and unknown input fails fast.

use std::{env, error::Error, path::PathBuf, sync::{atomic::AtomicBool, Arc}};

use crate::{
    brands,
    config::consts::HISTOGRAM_BINS,
    config::options::{BrandSelector, ExportFormat, ScrapeOptions},
    csv,
    file,
    progress::Progress,
    scrape,
    stats,
    store,
};

pub struct Params {
    pub list_brands: bool,
    pub scrape: bool,
    pub stats: bool,
    pub brand_stats: bool,
    pub brand_names: Vec<String>,
    pub category: Option<String>,
    pub out: Option<PathBuf>,
    pub format: ExportFormat,
    pub include_headers: bool,
    pub show_currency: bool,
    pub per_brand: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            list_brands: false,
            scrape: false,
            stats: false,
            brand_stats: false,
            brand_names: Vec::new(),
            category: None,
            out: None,
            format: ExportFormat::Csv,
            include_headers: false,
            show_currency: false,
            per_brand: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    if params.list_brands {
        for (id, name) in scrape::list_brands() {
            println!("{},{}", id, name);
        }
        return Ok(());
    }

    let brand_list = brands::load()?;

    if params.scrape {
        let selector = resolve_selector(&params, &brand_list)?;
        let opts = ScrapeOptions { brands: selector };
        let mut prog = CliProgress::default();
        let stop = Arc::new(AtomicBool::new(false));

        let fresh = scrape::collect_parts(&opts, &brand_list, Some(&mut prog), stop)?;
        let mut base = store::load_parts().unwrap_or_default();
        store::merge_parts(&mut base, fresh);
        let path = store::save_parts(&base)?;
        eprintln!("Saved {} rows to {}", base.row_count(), path.display());
    }

    let parts = match store::load_parts() {
        Ok(ds) => ds,
        Err(_) => {
            eprintln!("No cached data; run with --scrape first.");
            return Ok(());
        }
    };

    let rows = filter_rows(&parts, &params);

    if params.stats {
        print_price_stats(&rows);
    }
    if params.brand_stats {
        print_brand_stats(&rows);
    }

    if let Some(out) = &params.out {
        export_rows(&params, out, &parts.headers, &rows)?;
    } else if !params.stats && !params.brand_stats && !params.scrape {
        // Nothing asked for: dump the filtered table to stdout.
        print!("{}", csv::rows_to_string(&rows, &parts.headers, params.format.delim()));
    }

    Ok(())
}

fn resolve_selector(
    params: &Params,
    brand_list: &[(u32, String)],
) -> Result<BrandSelector, Box<dyn Error>> {
    if params.brand_names.is_empty() {
        return Ok(BrandSelector::All);
    }
    let mut ids = Vec::new();
    for name in &params.brand_names {
        let id = brand_list
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
            .ok_or_else(|| format!("Unknown brand: {}", name))?;
        ids.push(id);
    }
    ids.sort_unstable();
    ids.dedup();
    Ok(if ids.len() == 1 { BrandSelector::One(ids[0]) } else { BrandSelector::Ids(ids) })
}

fn filter_rows(parts: &store::DataSet, params: &Params) -> Vec<Vec<String>> {
    use crate::config::consts::{BRAND_COL, CATEGORY_COL};

    parts
        .rows
        .iter()
        .filter(|r| {
            let brand_ok = params.brand_names.is_empty()
                || r.get(BRAND_COL)
                    .map(|b| params.brand_names.iter().any(|n| n.eq_ignore_ascii_case(b)))
                    .unwrap_or(false);
            let cat_ok = match &params.category {
                None => true,
                Some(c) => r.get(CATEGORY_COL).map(|rc| rc == c).unwrap_or(false),
            };
            brand_ok && cat_ok
        })
        .cloned()
        .collect()
}

fn export_rows(
    params: &Params,
    out: &PathBuf,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> Result<(), Box<dyn Error>> {
    use crate::config::consts::PRICE_COL;

    let mut export = crate::config::options::ExportOptions::default();
    export.format = params.format;
    export.include_headers = params.include_headers;
    export.show_currency = params.show_currency;
    export.export_type = if params.per_brand {
        crate::config::options::ExportType::PerBrand
    } else {
        crate::config::options::ExportType::SingleFile
    };

    if params.per_brand {
        export.set_path(&out.to_string_lossy());
        let written = file::write_export_per_brand(&export, headers, rows, &[PRICE_COL])?;
        eprintln!("Exported {} file(s)", written.len());
    } else {
        // "-o somedir/" means "default filename inside that directory"
        let default_name = join!("parts", ".", params.format.ext());
        let resolved = file::resolve_single_out_path(&out.to_string_lossy(), &default_name)?;
        export.set_path(&resolved.to_string_lossy());
        let path = file::write_export_single(&export, headers, rows, &[PRICE_COL])?;
        eprintln!("Exported {}", path.display());
    }
    Ok(())
}

fn print_price_stats(rows: &[Vec<String>]) {
    println!("{:<16} {:<16} {:>12} {:>12} {:>12} {:>10}",
        "Brand", "Category", "Avg (R)", "Min (R)", "Max (R)", "Retailers");
    for st in stats::price_stats(rows) {
        println!("{:<16} {:<16} {:>12.2} {:>12.2} {:>12.2} {:>10}",
            st.brand, st.category, st.avg, st.min, st.max, st.retailers);
    }
}

fn print_brand_stats(rows: &[Vec<String>]) {
    println!("{:<16} {:>12} {:>8}  {}", "Brand", "Avg (R)", "Parts", "Distribution");
    for bs in stats::brand_stats(rows) {
        println!(
            "{:<16} {:>12.2} {:>8}  {}",
            bs.brand,
            bs.average,
            bs.total_parts,
            ascii_histogram(&bs.bins)
        );
    }
}

/// Ten-character bar strip, one glyph per bin, scaled by normalized count.
fn ascii_histogram(bins: &[stats::HistogramBin]) -> String {
    const LEVELS: [char; 5] = [' ', '▁', '▃', '▅', '█'];
    let mut out = String::with_capacity(HISTOGRAM_BINS);
    for bin in bins {
        let level = (bin.normalized * (LEVELS.len() - 1) as f64).ceil() as usize;
        out.push(LEVELS[level.min(LEVELS.len() - 1)]);
    }
    out
}

#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Scraping {} searches…", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("  [{}/{}] {}", self.done, self.total, label);
    }
    fn item_failed(&mut self, label: &str) {
        eprintln!("  FAILED {}", label);
    }
    fn finish(&mut self) {
        eprintln!("Done ({}/{})", self.done, self.total);
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--list-brands" => params.list_brands = true,
            "--scrape" => params.scrape = true,
            "--stats" => params.stats = true,
            "--brand-stats" => params.brand_stats = true,
            "-b" | "--brand" => {
                let v = args.next().ok_or("Missing value for --brand")?;
                params.brand_names.push(v);
            }
            "-c" | "--category" => {
                params.category = Some(args.next().ok_or("Missing value for --category")?);
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.include_headers = true,
            "--show-currency" => params.show_currency = true,
            "--per-brand" => params.per_brand = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
