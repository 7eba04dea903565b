use remito_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(pdf_file: PathBuf, output_format: &str) -> Result<(), remito_core::error::RemitoError> {
    let extractor = PdftotextExtractor::new();
    let lines = remito_core::extract_document(&pdf_file, &extractor)?;

    match output_format {
        "json" => output::json::print(&lines)?,
        _ => print!("{}", output::table::format_lines(&lines)),
    }

    Ok(())
}
