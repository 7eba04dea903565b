pub mod brand;

use std::sync::OnceLock;

use regex::Regex;

use crate::model::ProductLine;
pub use brand::split_brand;

/// Lazily extract product lines from the text of one page.
///
/// Each physical line is trimmed and tried with [`parse_line`]; lines that
/// don't look like product rows are skipped without error.
pub fn extract_lines<'a>(
    page_text: &'a str,
    source_document: &'a str,
) -> impl Iterator<Item = ProductLine> + 'a {
    page_text
        .lines()
        .filter_map(move |line| parse_line(line, source_document))
}

/// Try to parse a single text line as `<code> <description> [BRAND] <quantity>`.
///
/// Returns None if the line doesn't look like a product row.
pub fn parse_line(line: &str, source_document: &str) -> Option<ProductLine> {
    let line = line.trim();
    if !is_candidate(line) {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }

    let code = tokens[0];
    let quantity: u64 = tokens[tokens.len() - 1].parse().ok()?;
    let middle = tokens[1..tokens.len() - 1].join(" ");
    let (description, brand) = split_brand(&middle);

    Some(ProductLine {
        code: code.to_string(),
        description,
        brand,
        quantity,
        source_document: source_document.to_string(),
    })
}

/// A candidate starts with digits followed by whitespace and ends with
/// whitespace followed by digits.
fn is_candidate(line: &str) -> bool {
    static RE_LEADING: OnceLock<Regex> = OnceLock::new();
    static RE_TRAILING: OnceLock<Regex> = OnceLock::new();
    let re_leading = RE_LEADING.get_or_init(|| Regex::new(r"^[0-9]+\s").unwrap());
    let re_trailing = RE_TRAILING.get_or_init(|| Regex::new(r"\s[0-9]+\s*$").unwrap());

    re_leading.is_match(line) && re_trailing.is_match(line)
}
