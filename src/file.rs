// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::BRAND_COL;
use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_brand_filename;
use crate::csv::to_export_string;

/// Write a single export file based on ExportOptions (path, headers policy,
/// delimiter, currency toggle). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    price_cols: &[usize],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(
        headers,
        rows,
        export.include_headers,
        export.show_currency,
        price_cols,
        export.delimiter(),
    );

    fs::write(&path, contents)?;
    Ok(path)
}

/// Write one file per brand into the directory implied by `export.out_path()`
/// (which must be a directory when `export.export_type == PerBrand`).
pub fn write_export_per_brand(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    price_cols: &[usize],
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    let mut by_brand: HashMap<String, Vec<Vec<String>>> = HashMap::new();
    for r in rows {
        if let Some(brand) = r.get(BRAND_COL) {
            by_brand.entry(brand.clone()).or_default().push(r.clone());
        }
    }

    // Dedup stems and write each file
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(by_brand.len());
    let ext = export.format.ext();

    for (brand_name, brand_rows) in by_brand {
        let base_stem = sanitize_brand_filename(&brand_name, 0);
        let path = resolve_brand_filename(&outdir, &base_stem, &mut seen, ext);

        let contents = to_export_string(
            headers,
            &brand_rows,
            export.include_headers,
            export.show_currency,
            price_cols,
            export.delimiter(),
        );

        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

pub fn resolve_single_out_path(
    user_o: &str,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Duplicate handling **only within this run**
pub fn resolve_brand_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv"
) -> PathBuf {
    // How many times have we seen this base?
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
