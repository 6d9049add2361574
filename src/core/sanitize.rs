// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

pub fn sanitize_brand_filename(name: &str, id: u32) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { format!("brand_{}", id) } else { out }
}

/// Parse a retailer price string into rand-and-cents.
/// Strips the currency symbol, grouping spaces and commas ("R 1,234.56",
/// "R1 234.56"), then parses the remainder. Unparsable input yields 0.0;
/// callers drop non-positive prices.
pub fn parse_price(text: &str) -> f64 {
    let clean: String = text
        .chars()
        .filter(|&c| c != 'R' && c != ',' && !c.is_whitespace())
        .collect();
    clean.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_strips_currency_and_grouping() {
        assert_eq!(parse_price("R 1,234.56"), 1234.56);
        assert_eq!(parse_price("R649.00"), 649.0);
        assert_eq!(parse_price("1 299.99"), 1299.99);
        assert_eq!(parse_price("R\u{a0}2 450"), 2450.0);
    }

    #[test]
    fn parse_price_garbage_is_zero() {
        assert_eq!(parse_price("Call us"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn brand_filename_collapses_junk() {
        assert_eq!(sanitize_brand_filename("Mercedes-Benz", 0), "Mercedes-Benz");
        assert_eq!(sanitize_brand_filename("Alfa  Romeo", 0), "Alfa_Romeo");
        assert_eq!(sanitize_brand_filename("???", 7), "brand_7");
    }
}
