use c12_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), c12_core::error::C12Error> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let parsed = c12_core::parse_pdf(&pdf_bytes, &extractor)?;

    match output_format {
        "json" => output::json::print(&parsed)?,
        _ => output::table::print_document(&parsed),
    }

    if !parsed.skipped_rows.is_empty() {
        eprintln!(
            "  {} row(s) skipped during parsing",
            parsed.skipped_rows.len()
        );
    }

    Ok(())
}
