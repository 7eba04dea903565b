use chrono::Local;
use remito_core::error::RemitoError;
use remito_core::extraction::pdftotext::PdftotextExtractor;
use remito_core::report::report_file_name;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_dir: PathBuf,
    output_file: Option<PathBuf>,
    preview: usize,
    output_format: &str,
) -> Result<(), RemitoError> {
    let output_file = output_file
        .unwrap_or_else(|| PathBuf::from(report_file_name(Local::now().date_naive())));

    if !PdftotextExtractor::is_available() {
        log::warn!("pdftotext not found on PATH; every document will be skipped");
    }
    let extractor = PdftotextExtractor::new();

    let summary = remito_core::run_batch(&input_dir, &output_file, &extractor)?;

    match output_format {
        "json" => output::json::print(&summary)?,
        _ => output::table::print_summary(&summary, &output_file, preview),
    }

    Ok(())
}
