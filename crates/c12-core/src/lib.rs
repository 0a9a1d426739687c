pub mod aggregate;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;

use aggregate::{AggregatedDataset, BatchEvent, DocumentInput};
use error::C12Error;
use extraction::PdfExtractor;
use parsing::ParsedDocument;

/// Parse a single C12 PDF into company info and classified table rows.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ParsedDocument, C12Error> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    parsing::parse_document(&pages)
}

/// Run a full conversion batch: parse every uploaded document, merge
/// and sort the results, and serialize the four-sheet workbook.
///
/// Per-document failures are reported through the observer and do not
/// stop the batch; see `aggregate::aggregate_documents` for the fatal
/// cases (`NoData`, `MonthKey`).
pub fn convert_documents<F>(
    inputs: &[DocumentInput],
    extractor: &dyn PdfExtractor,
    observer: F,
) -> Result<(AggregatedDataset, Vec<u8>), C12Error>
where
    F: FnMut(BatchEvent),
{
    let dataset = aggregate::aggregate_documents(inputs, extractor, observer)?;
    let workbook = export::write_workbook(&dataset)?;
    Ok((dataset, workbook))
}
