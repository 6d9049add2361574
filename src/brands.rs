// src/brands.rs
//
// User-managed brand registry, cached as id,name lines in .store/brands.csv.
// Seeds a default list on first run so a fresh install has something to
// scrape. Deletion cascades (dropping the brand's part rows) is handled by
// the caller via store::remove_brand_rows.

use std::{error::Error, fs, path::Path};

use crate::config::consts::{BRANDS_FILE, DEFAULT_BRANDS};

/// Load brands from cache, seeding the defaults on first run.
/// Returns (id, name) pairs, always sorted by id.
pub fn load() -> Result<Vec<(u32, String)>, Box<dyn Error>> {
    if Path::new(BRANDS_FILE).exists() {
        if let Ok(text) = fs::read_to_string(BRANDS_FILE) {
            if let Ok(list) = parse_file(&text) {
                return Ok(list);
            }
        }
    }

    // first run: seed defaults and write the cache
    let brands: Vec<(u32, String)> = DEFAULT_BRANDS
        .iter()
        .enumerate()
        .map(|(i, name)| (i as u32, s!(*name)))
        .collect();
    save(&brands)?;
    Ok(brands)
}

pub fn save(brands: &[(u32, String)]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = Path::new(BRANDS_FILE).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut buf = s!();
    for (id, name) in brands {
        buf.push_str(&format!("{},{}\n", id, name));
    }
    fs::write(BRANDS_FILE, buf)?;
    Ok(())
}

/// Add a brand by name. Rejects blanks and duplicates (case-insensitive).
/// Returns the updated, saved list.
pub fn add(name: &str) -> Result<Vec<(u32, String)>, Box<dyn Error>> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Brand name is empty".into());
    }

    let mut brands = load()?;
    if brands.iter().any(|(_, n)| n.eq_ignore_ascii_case(name)) {
        return Err("Brand already exists".into());
    }

    let next_id = brands.iter().map(|(id, _)| *id + 1).max().unwrap_or(0);
    brands.push((next_id, s!(name)));
    brands.sort_by_key(|(id, _)| *id);
    save(&brands)?;
    Ok(brands)
}

/// Remove a brand by name. Returns the updated, saved list.
pub fn remove(name: &str) -> Result<Vec<(u32, String)>, Box<dyn Error>> {
    let mut brands = load()?;
    let before = brands.len();
    brands.retain(|(_, n)| n != name);
    if brands.len() == before {
        return Err("Brand not found".into());
    }
    save(&brands)?;
    Ok(brands)
}

/// Parse a brands.csv into Vec<(id, name)>
fn parse_file(text: &str) -> Result<Vec<(u32, String)>, Box<dyn Error>> {
    let mut out = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() { continue; }
        let mut parts = line.splitn(2, ',');
        let id_str = parts.next().ok_or("Malformed line")?;
        let name = parts.next().ok_or("Malformed line")?;
        let id: u32 = id_str.trim().parse()?;
        out.push((id, name.trim().to_string()));
    }
    out.sort_by_key(|(id, _)| *id);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_file_sorts_by_id() {
        let list = parse_file("2,Ford\n0,Toyota\n1,Volkswagen\n").unwrap();
        assert_eq!(
            list,
            vec![(0, s!("Toyota")), (1, s!("Volkswagen")), (2, s!("Ford"))]
        );
    }

    #[test]
    fn parse_file_rejects_bad_id() {
        assert!(parse_file("x,Toyota\n").is_err());
    }

    #[test]
    fn parse_file_keeps_commas_in_names() {
        let list = parse_file("0,Brand, with comma\n").unwrap();
        assert_eq!(list[0].1, "Brand, with comma");
    }
}
