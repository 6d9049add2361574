// src/specs/africaboyz.rs
//
// africaboyzonline.com search results.
// Product tiles live under <div class="products-list"> as
// <div class="product-layout"> blocks; the title anchor sits inside
// <h4 class="giveMeEllipsis">, the price in <span class="price-new">.
// Product hrefs are shop-relative and must be absolutized.

use std::error::Error;

use crate::core::html::{attr_value, has_class, inner_after_open_tag, next_tag_block_ci, open_tag, strip_tags};
use crate::core::sanitize::{normalize_entities, parse_price};
use crate::core::net;

use super::Listing;

pub const NAME: &str = "AfricaBoyz Online";
pub const HOST: &str = "africaboyzonline.com";

pub fn search_path(brand: &str, part: &str) -> String {
    format!(
        "/search?q={}+{}",
        net::query_encode(brand),
        net::query_encode(part)
    )
}

pub fn fetch(brand: &str, part: &str) -> Result<Vec<Listing>, Box<dyn Error>> {
    let html = net::http_get(HOST, &search_path(brand, part))?;
    Ok(parse_listings(&html))
}

pub fn parse_listings(doc: &str) -> Vec<Listing> {
    // Constrain the scan to the product grid when present; some templates
    // reuse product-layout in "recently viewed" rails outside it.
    let grid = match next_tag_block_ci(doc, "<div class=\"products-list", "</section>", 0) {
        Some((s, e)) => &doc[s..e],
        None => doc,
    };

    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((d_s, d_e)) = next_tag_block_ci(grid, "<div", "</div>", pos) {
        let tile = &grid[d_s..d_e];
        // Step one tag at a time; tiles nest plain divs we must descend past.
        pos = d_s + 1;

        if !has_class(open_tag(tile), "product-layout") {
            continue;
        }
        if let Some(listing) = parse_tile(tile) {
            out.push(listing);
        }
        pos = d_e;
    }
    out
}

fn parse_tile(tile: &str) -> Option<Listing> {
    let (h4_s, h4_e) = next_tag_block_ci(tile, "<h4", "</h4>", 0)?;
    let h4 = &tile[h4_s..h4_e];
    if !has_class(open_tag(h4), "giveMeEllipsis") {
        return None;
    }
    let (a_s, a_e) = next_tag_block_ci(h4, "<a", "</a>", 0)?;
    let anchor = &h4[a_s..a_e];
    let name = strip_tags(normalize_entities(&inner_after_open_tag(anchor)));
    let url = absolutize(attr_value(open_tag(anchor), "href").unwrap_or(""));

    let price = find_price_new(tile)?;

    if name.is_empty() || price <= 0.0 {
        return None;
    }
    Some(Listing { name, price, url })
}

fn find_price_new(tile: &str) -> Option<f64> {
    let mut pos = 0usize;
    while let Some((s_s, s_e)) = next_tag_block_ci(tile, "<span", "</span>", pos) {
        let span = &tile[s_s..s_e];
        pos = s_e;
        if has_class(open_tag(span), "price-new") {
            let text = strip_tags(normalize_entities(&inner_after_open_tag(span)));
            return Some(parse_price(&text));
        }
    }
    None
}

fn absolutize(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        join!("https://", HOST, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <section id="content">
        <div class="products-list row">
          <div class="product-layout product-grid">
            <div class="caption">
              <h4 class="giveMeEllipsis">
                <a href="/shock-absorber-monroe-g8805">Monroe Gas Shock Absorber G8805</a>
              </h4>
              <p class="price">
                <span class="price-new">R649.00</span>
                <span class="price-old">R799.00</span>
              </p>
            </div>
          </div>
          <div class="product-layout product-grid">
            <div class="caption">
              <h4 class="giveMeEllipsis">
                <a href="https://africaboyzonline.com/brake-pads-ate">ATE Brake Pads Front</a>
              </h4>
              <p class="price"><span class="price-new">R 1 150.00</span></p>
            </div>
          </div>
        </div>
        </section>
    "#;

    #[test]
    fn parses_grid_tiles() {
        let listings = parse_listings(SAMPLE);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].name, "Monroe Gas Shock Absorber G8805");
        assert_eq!(listings[0].price, 649.0);
        assert_eq!(
            listings[0].url,
            "https://africaboyzonline.com/shock-absorber-monroe-g8805"
        );
        // Absolute hrefs pass through untouched
        assert_eq!(listings[1].url, "https://africaboyzonline.com/brake-pads-ate");
        assert_eq!(listings[1].price, 1150.0);
    }

    #[test]
    fn old_price_is_ignored() {
        let listings = parse_listings(SAMPLE);
        assert_eq!(listings[0].price, 649.0); // not the crossed-out 799
    }

    #[test]
    fn search_path_encodes_terms() {
        assert_eq!(search_path("BMW", "wheel bearing"), "/search?q=BMW+wheel+bearing");
    }
}
