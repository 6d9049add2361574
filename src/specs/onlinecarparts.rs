// src/specs/onlinecarparts.rs
//
// onlinecarparts.co.za search results.
// Product tiles are <article class="product-miniature"> blocks; the title
// anchor inside <h3 class="product-title"> carries name + absolute href,
// and <span class="price"> the display price.

use std::error::Error;

use crate::core::html::{attr_value, has_class, inner_after_open_tag, next_tag_block_ci, open_tag, strip_tags};
use crate::core::sanitize::{normalize_entities, parse_price};
use crate::core::net;

use super::Listing;

pub const NAME: &str = "Online Car Parts";
pub const HOST: &str = "onlinecarparts.co.za";

pub fn search_path(brand: &str, part: &str) -> String {
    format!(
        "/search?controller=search&s={}+{}",
        net::query_encode(brand),
        net::query_encode(part)
    )
}

pub fn fetch(brand: &str, part: &str) -> Result<Vec<Listing>, Box<dyn Error>> {
    let html = net::http_get(HOST, &search_path(brand, part))?;
    Ok(parse_listings(&html))
}

pub fn parse_listings(doc: &str) -> Vec<Listing> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((a_s, a_e)) = next_tag_block_ci(doc, "<article", "</article>", pos) {
        let tile = &doc[a_s..a_e];
        pos = a_e;

        if !has_class(open_tag(tile), "product-miniature") {
            continue;
        }
        if let Some(listing) = parse_tile(tile) {
            out.push(listing);
        }
    }
    out
}

fn parse_tile(tile: &str) -> Option<Listing> {
    // Title anchor: <h3 class="product-title"><a href="...">Name</a></h3>
    let (h3_s, h3_e) = next_tag_block_ci(tile, "<h3", "</h3>", 0)?;
    let h3 = &tile[h3_s..h3_e];
    if !has_class(open_tag(h3), "product-title") {
        return None;
    }
    let (a_s, a_e) = next_tag_block_ci(h3, "<a", "</a>", 0)?;
    let anchor = &h3[a_s..a_e];
    let name = strip_tags(normalize_entities(&inner_after_open_tag(anchor)));
    let url = attr_value(open_tag(anchor), "href").unwrap_or("").to_string();

    // Display price: <span class="price">R 1,234.56</span>
    let price = find_price(tile)?;

    if name.is_empty() || price <= 0.0 {
        return None;
    }
    Some(Listing { name, price, url })
}

fn find_price(tile: &str) -> Option<f64> {
    let mut pos = 0usize;
    while let Some((s_s, s_e)) = next_tag_block_ci(tile, "<span", "</span>", pos) {
        let span = &tile[s_s..s_e];
        pos = s_e;
        if has_class(open_tag(span), "price") {
            let text = strip_tags(normalize_entities(&inner_after_open_tag(span)));
            return Some(parse_price(&text));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <div id="products">
          <article class="product-miniature js-product">
            <h3 class="product-title">
              <a href="https://onlinecarparts.co.za/oil-filters/123-mann.html">MANN Oil Filter W 712/75</a>
            </h3>
            <p class="pl_manufacturer"><a><strong>MANN</strong></a></p>
            <span class="price">R 189.00</span>
          </article>
          <article class="product-miniature">
            <h3 class="product-title">
              <a href="https://onlinecarparts.co.za/filters/456-bosch.html">Bosch Oil Filter &amp; Seal</a>
            </h3>
            <span class="price">R 1,249.50</span>
          </article>
          <article class="ad-banner"><h3 class="product-title"><a href="/x">junk</a></h3></article>
        </div>
    "#;

    #[test]
    fn parses_product_tiles_only() {
        let listings = parse_listings(SAMPLE);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].name, "MANN Oil Filter W 712/75");
        assert_eq!(listings[0].price, 189.0);
        assert!(listings[0].url.ends_with("123-mann.html"));
        assert_eq!(listings[1].name, "Bosch Oil Filter & Seal");
        assert_eq!(listings[1].price, 1249.50);
    }

    #[test]
    fn tile_without_price_is_dropped() {
        let doc = r#"
            <article class="product-miniature">
              <h3 class="product-title"><a href="/p">No price here</a></h3>
            </article>
        "#;
        assert!(parse_listings(doc).is_empty());
    }

    #[test]
    fn search_path_encodes_terms() {
        assert_eq!(
            search_path("Toyota", "oil filter"),
            "/search?controller=search&s=Toyota+oil+filter"
        );
    }
}
