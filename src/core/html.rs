// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// The `<tag ...>` opening portion of a block (for attribute scans).
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(oe) => &block[..=oe],
        None => block,
    }
}

/// Scan a tag's attributes for `name="value"` (double quotes only, the form
/// both retailer templates emit). Case-insensitive attribute name.
pub fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(tag);
    let needle = join!(to_lower(name), "=\"");
    let at = lc.find(&needle)? + needle.len();
    let end = tag[at..].find('"')? + at;
    Some(&tag[at..end])
}

/// Does the opening tag carry `class="... name ..."`?
pub fn has_class(tag: &str, name: &str) -> bool {
    match attr_value(tag, "class") {
        Some(cls) => cls.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(name)),
        None => false,
    }
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_value_finds_href() {
        let tag = r#"<a href="/product/7" class="product-link">"#;
        assert_eq!(attr_value(tag, "href"), Some("/product/7"));
        assert_eq!(attr_value(tag, "HREF"), Some("/product/7"));
        assert_eq!(attr_value(tag, "title"), None);
    }

    #[test]
    fn has_class_matches_whole_words() {
        let tag = r#"<article class="product-miniature js-product">"#;
        assert!(has_class(tag, "product-miniature"));
        assert!(has_class(tag, "js-product"));
        assert!(!has_class(tag, "product"));
    }

    #[test]
    fn tag_block_scan_is_case_insensitive() {
        let html = "<DIV class=\"x\">hello <b>world</b></DIV>";
        let (s, e) = next_tag_block_ci(html, "<div", "</div>", 0).unwrap();
        let block = &html[s..e];
        assert_eq!(strip_tags(inner_after_open_tag(block)), "hello world");
    }
}
