pub mod consolidate;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod report;

use std::path::{Path, PathBuf};

use serde::Serialize;

use consolidate::Consolidator;
use error::RemitoError;
use extraction::PdfExtractor;
use model::{ConsolidatedProduct, ProductLine};

/// Extract product lines from the bytes of one PDF.
///
/// Every page is run through the line extractor; lines are tagged with
/// `source_document`.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    source_document: &str,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<ProductLine>, RemitoError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let mut lines = Vec::new();
    for page in &pages {
        let before = lines.len();
        lines.extend(parsing::extract_lines(&page.text, source_document));
        log::debug!(
            "{} page {}: {} product line(s)",
            source_document,
            page.page_number,
            lines.len() - before
        );
    }

    Ok(lines)
}

/// Read a PDF from disk and extract its product lines.
pub fn extract_document(
    path: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<Vec<ProductLine>, RemitoError> {
    let pdf_bytes = std::fs::read(path)?;
    extract_pdf(&pdf_bytes, &discovery::document_name(path), extractor)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DocumentOutcome {
    Extracted { lines: usize },
    Skipped { reason: String },
}

/// What happened to one input document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: DocumentOutcome,
}

/// Result of processing a batch of documents.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub documents: Vec<DocumentReport>,
    /// Product lines extracted before consolidation.
    pub line_count: usize,
    /// Lines whose description or brand differed from the first one kept.
    pub conflicts: usize,
    pub products: Vec<ConsolidatedProduct>,
}

impl RunSummary {
    pub fn total_quantity(&self) -> u128 {
        self.products.iter().map(|p| p.quantity).sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &DocumentReport> {
        self.documents
            .iter()
            .filter(|d| matches!(d.outcome, DocumentOutcome::Skipped { .. }))
    }
}

/// Extract and consolidate the given documents in order.
///
/// A document that fails to decode is logged and recorded as skipped; it
/// contributes no lines and the remaining documents are still processed.
pub fn process_documents(paths: &[PathBuf], extractor: &dyn PdfExtractor) -> RunSummary {
    let mut documents = Vec::with_capacity(paths.len());
    let mut consolidator = Consolidator::default();
    let mut line_count = 0;

    for path in paths {
        let name = discovery::document_name(path);
        let outcome = match extract_document(path, extractor) {
            Ok(lines) => {
                log::info!("{}: {} product line(s)", name, lines.len());
                for line in &lines {
                    consolidator.push(line);
                }
                line_count += lines.len();
                DocumentOutcome::Extracted { lines: lines.len() }
            }
            Err(e) => {
                log::error!("skipping {} ({}): {}", name, extractor.backend_name(), e);
                DocumentOutcome::Skipped {
                    reason: e.to_string(),
                }
            }
        };
        documents.push(DocumentReport { name, outcome });
    }

    RunSummary {
        documents,
        line_count,
        conflicts: consolidator.conflicts(),
        products: consolidator.finish(),
    }
}

/// Main API entry point: scan `input_dir`, consolidate every PDF found and
/// write the report to `output`.
///
/// Only a report write failure (or an unreadable input directory) is an
/// error; per-document failures are reported in the returned summary.
pub fn run_batch(
    input_dir: &Path,
    output: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<RunSummary, RemitoError> {
    let paths = discovery::discover_documents(input_dir)?;
    let summary = process_documents(&paths, extractor);
    report::write_report(&summary.products, output)?;
    Ok(summary)
}
