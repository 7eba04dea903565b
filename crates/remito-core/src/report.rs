use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};

use crate::error::RemitoError;
use crate::model::ConsolidatedProduct;

pub const SHEET_NAME: &str = "Descuento Remitos";

pub const HEADERS: [&str; 5] = ["Code", "Description", "Brand", "Quantity", "SourceDocuments"];

/// Widths of columns A..D; column E is sized from its content.
const FIXED_WIDTHS: [f64; 4] = [10.0, 50.0, 20.0, 12.0];

const HEADER_FILL: u32 = 0x4472C4;

/// Largest quantity an xlsx number cell (an f64) holds exactly.
const MAX_EXACT_NUMBER: u128 = 1 << 53;

/// `Descuento-DDMMYYYY.xlsx` for the given run date.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("Descuento-{}.xlsx", date.format("%d%m%Y"))
}

/// Width of the source-documents column: the header width, or half the
/// longest joined source list plus a margin, whichever is larger.
pub fn sources_column_width(products: &[ConsolidatedProduct]) -> f64 {
    let header = HEADERS[4].chars().count() as f64;
    products
        .iter()
        .map(|p| p.joined_sources().chars().count() as f64 / 2.0 + 2.0)
        .fold(header, f64::max)
}

/// Lay out the report workbook in memory.
pub fn build_workbook(products: &[ConsolidatedProduct]) -> Result<Workbook, XlsxError> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();
    let centered = Format::new().set_align(FormatAlign::Center);
    let left = Format::new().set_align(FormatAlign::Left);
    let left_wrapped = Format::new().set_align(FormatAlign::Left).set_text_wrap();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, product) in products.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string_with_format(row, 0, product.code.as_str(), &centered)?;
        sheet.write_string_with_format(row, 1, product.description.as_str(), &left_wrapped)?;
        sheet.write_string_with_format(row, 2, product.brand.as_str(), &left)?;
        if product.quantity <= MAX_EXACT_NUMBER {
            sheet.write_number_with_format(row, 3, product.quantity as f64, &centered)?;
        } else {
            sheet.write_string_with_format(row, 3, product.quantity.to_string().as_str(), &centered)?;
        }
        sheet.write_string_with_format(row, 4, product.joined_sources().as_str(), &left_wrapped)?;
    }

    for (col, width) in FIXED_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    sheet.set_column_width(4, sources_column_width(products))?;

    Ok(workbook)
}

/// Write the consolidated report to `path`, replacing any existing file.
///
/// The workbook is written to a temporary file next to `path` and renamed
/// into place, so a failure never leaves a truncated report behind.
pub fn write_report(products: &[ConsolidatedProduct], path: &Path) -> Result<(), RemitoError> {
    let mut workbook = build_workbook(products)?;
    let buffer = workbook.save_to_buffer()?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmpfile = tempfile::NamedTempFile::new_in(dir)?;
    tmpfile.write_all(&buffer)?;
    tmpfile.flush()?;
    tmpfile
        .persist(path)
        .map_err(|e| RemitoError::ReportWrite {
            path: path.to_path_buf(),
            reason: e.error.to_string(),
        })?;

    log::info!(
        "wrote {} product row(s) to {}",
        products.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    fn product(code: &str, qty: u128, sources: &[&str]) -> ConsolidatedProduct {
        ConsolidatedProduct {
            code: code.into(),
            description: "Llave francesa".into(),
            brand: "BAHCO".into(),
            quantity: qty,
            source_documents: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_report_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(report_file_name(date), "Descuento-07032024.xlsx");
    }

    #[test]
    fn test_sources_width_defaults_to_header() {
        assert_eq!(sources_column_width(&[]), 15.0);
        assert_eq!(sources_column_width(&[product("1", 1, &["a.pdf"])]), 15.0);
    }

    #[test]
    fn test_sources_width_grows_with_content() {
        // "remito-0001.pdf, remito-0002.pdf" is 32 chars -> 32 / 2 + 2
        let p = product("1", 1, &["remito-0001.pdf", "remito-0002.pdf"]);
        assert_eq!(sources_column_width(&[p]), 18.0);
    }

    #[test]
    fn test_write_report_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let products = vec![
            product("0042", 12, &["a.pdf", "b.pdf"]),
            product("7", 3, &["b.pdf"]),
        ];

        write_report(&products, &path).unwrap();

        let mut wb: Xlsx<_> = open_workbook(&path).unwrap();
        let range = wb.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.height(), 3);
        assert_eq!(range.width(), 5);
        for (col, title) in HEADERS.iter().enumerate() {
            assert_eq!(
                range.get_value((0, col as u32)),
                Some(&Data::String(title.to_string()))
            );
        }
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("0042".into())));
        assert_eq!(range.get_value((1, 3)), Some(&Data::Float(12.0)));
        assert_eq!(
            range.get_value((1, 4)),
            Some(&Data::String("a.pdf, b.pdf".into()))
        );
        assert_eq!(range.get_value((2, 0)), Some(&Data::String("7".into())));
    }

    #[test]
    fn test_write_report_keeps_huge_quantities_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.xlsx");
        let huge = 2 * u128::from(u64::MAX) + 1;
        let products = vec![
            product("1", MAX_EXACT_NUMBER, &["a.pdf"]),
            product("2", huge, &["a.pdf", "b.pdf"]),
        ];

        write_report(&products, &path).unwrap();

        let mut wb: Xlsx<_> = open_workbook(&path).unwrap();
        let range = wb.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(
            range.get_value((1, 3)),
            Some(&Data::Float(9007199254740992.0))
        );
        assert_eq!(
            range.get_value((2, 3)),
            Some(&Data::String("36893488147419103231".into()))
        );
    }

    #[test]
    fn test_write_report_empty_has_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        write_report(&[], &path).unwrap();

        let mut wb: Xlsx<_> = open_workbook(&path).unwrap();
        let range = wb.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.height(), 1);
        assert_eq!(
            range.get_value((0, 4)),
            Some(&Data::String("SourceDocuments".into()))
        );
    }

    #[test]
    fn test_write_report_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        std::fs::write(&path, b"stale").unwrap();

        write_report(&[product("1", 1, &["a.pdf"])], &path).unwrap();

        let mut wb: Xlsx<_> = open_workbook(&path).unwrap();
        let range = wb.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.height(), 2);
    }
}
