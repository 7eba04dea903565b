use std::sync::OnceLock;

use regex::Regex;

/// Split the text between code and quantity into `(description, brand)`.
///
/// The brand is the trailing run of uppercase letters and spaces, taken from
/// the leftmost whitespace after which nothing but `A-Z` and whitespace
/// follows. Text with no such run is all description and the brand is empty.
/// A middle made of a single uppercase word has no whitespace to anchor on,
/// so it stays description.
pub fn split_brand(middle: &str) -> (String, String) {
    static RE_BRAND: OnceLock<Regex> = OnceLock::new();
    let re_brand = RE_BRAND.get_or_init(|| Regex::new(r"\s([A-Z\s]+?)\s*$").unwrap());

    match re_brand.captures(middle) {
        Some(caps) => {
            let whole = caps.get(0).map(|m| m.start()).unwrap_or(0);
            let brand = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            (middle[..whole].trim().to_string(), brand.to_string())
        }
        None => (middle.trim().to_string(), String::new()),
    }
}
