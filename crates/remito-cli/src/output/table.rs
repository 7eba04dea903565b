use remito_core::model::{ConsolidatedProduct, ProductLine};
use remito_core::{DocumentOutcome, RunSummary};
use std::fmt::Write;
use std::path::Path;

/// Descriptions longer than this are cut in the preview.
const PREVIEW_DESCRIPTION_CHARS: usize = 40;

pub fn print_summary(summary: &RunSummary, output_file: &Path, preview: usize) {
    print!("{}", format_summary(summary, output_file, preview));
}

fn format_summary(summary: &RunSummary, output_file: &Path, preview: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "PDFs found: {}", summary.documents.len());
    for doc in &summary.documents {
        match &doc.outcome {
            DocumentOutcome::Extracted { lines } => {
                let _ = writeln!(out, "  {}: {} product line(s)", doc.name, lines);
            }
            DocumentOutcome::Skipped { reason } => {
                let _ = writeln!(out, "  {}: skipped ({})", doc.name, reason);
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Product lines: {}", summary.line_count);
    let _ = writeln!(out, "Unique products: {}", summary.products.len());
    if summary.conflicts > 0 {
        let _ = writeln!(
            out,
            "  {} line(s) had a different description or brand than the first seen for their code",
            summary.conflicts
        );
    }

    if preview > 0 && !summary.products.is_empty() {
        let _ = writeln!(out, "\n--- Preview ---");
        for product in summary.products.iter().take(preview) {
            let _ = writeln!(out, "  {}", preview_line(product));
        }
    }

    let _ = writeln!(out, "\nReport written: {}", output_file.display());
    let _ = writeln!(out, "  Unique products: {}", summary.products.len());
    let _ = writeln!(out, "  Total quantity: {}", summary.total_quantity());
    out
}

fn preview_line(product: &ConsolidatedProduct) -> String {
    let description: String = product
        .description
        .chars()
        .take(PREVIEW_DESCRIPTION_CHARS)
        .collect();
    format!(
        "{}: {} - {} - Quantity: {}",
        product.code, description, product.brand, product.quantity
    )
}

/// Render raw product lines as aligned columns.
pub fn format_lines(lines: &[ProductLine]) -> String {
    if lines.is_empty() {
        return "No product lines found.\n".to_string();
    }

    let code_w = column_width(lines.iter().map(|l| l.code.as_str()), "Code");
    let desc_w = column_width(lines.iter().map(|l| l.description.as_str()), "Description");
    let brand_w = column_width(lines.iter().map(|l| l.brand.as_str()), "Brand");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<code_w$}  {:<desc_w$}  {:<brand_w$}  {:>8}",
        "Code", "Description", "Brand", "Quantity"
    );
    for line in lines {
        let _ = writeln!(
            out,
            "{:<code_w$}  {:<desc_w$}  {:<brand_w$}  {:>8}",
            line.code, line.description, line.brand, line.quantity
        );
    }
    let _ = writeln!(out, "\n{} product line(s)", lines.len());
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
