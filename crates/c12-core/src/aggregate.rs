use crate::error::C12Error;
use crate::extraction::PdfExtractor;
use crate::model::{CompanyRecord, DataRow, MonthKey};
use crate::parsing::{self, ParsedDocument};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter key of the "PS trong ky" subview (section B, period activity).
pub const PERIOD_ACTIVITY_KEY: &str = "B";

/// Filter key of the "SL lao dong" subview (section Đ item 1, headcount).
pub const HEADCOUNT_KEY: &str = "Đ_1";

/// One uploaded document, in upload order.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A document that could not be opened or parsed. The batch goes on
/// without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub file_name: String,
    pub message: String,
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error processing file {}: {}", self.file_name, self.message)
    }
}

/// Notifications emitted while a batch runs. Pure side-channel for an
/// external progress/error display; nothing feeds back into the batch.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// Emitted after each document finishes, fraction in (0, 1].
    Progress { fraction: f64, status: String },
    DocumentFailed(DocumentFailure),
}

/// The merged output of one batch run, sorted chronologically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedDataset {
    pub companies: Vec<CompanyRecord>,
    pub rows: Vec<DataRow>,
    /// Rows with filter key "B", in full-table order.
    pub period_activity: Vec<DataRow>,
    /// Rows with filter key "Đ_1", in full-table order.
    pub headcount: Vec<DataRow>,
}

/// Run the document parser over every upload and merge the results.
///
/// Documents are processed one at a time in upload order. A document
/// that fails to extract or parse is skipped entirely (its failure is
/// reported through the observer) and contributes nothing. Once all
/// documents are in, both collections are stable-sorted by calendar
/// month and the two fixed subviews are derived.
///
/// A report month that cannot be parsed as "M/YYYY" aborts the whole
/// aggregation with `C12Error::MonthKey`; a batch where no document
/// yielded both company info and rows ends in `C12Error::NoData`.
pub fn aggregate_documents<F>(
    inputs: &[DocumentInput],
    extractor: &dyn PdfExtractor,
    mut observer: F,
) -> Result<AggregatedDataset, C12Error>
where
    F: FnMut(BatchEvent),
{
    let mut companies: Vec<CompanyRecord> = Vec::new();
    let mut rows: Vec<DataRow> = Vec::new();
    let mut any_rows = false;

    for (i, input) in inputs.iter().enumerate() {
        match parse_one(&input.bytes, extractor) {
            Ok(doc) => {
                companies.push(doc.company);
                if !doc.rows.is_empty() {
                    any_rows = true;
                }
                rows.extend(doc.rows);
            }
            Err(e) => {
                observer(BatchEvent::DocumentFailed(DocumentFailure {
                    file_name: input.file_name.clone(),
                    message: e.to_string(),
                }));
            }
        }

        observer(BatchEvent::Progress {
            fraction: (i + 1) as f64 / inputs.len() as f64,
            status: format!("processing: {}", input.file_name),
        });
    }

    if companies.is_empty() || !any_rows {
        return Err(C12Error::NoData);
    }

    // The two collections are sorted independently, never zipped.
    sort_by_month(&mut companies, |c| &c.report_month)?;
    sort_by_month(&mut rows, |r| &r.report_month)?;

    let period_activity = filter_by_key(&rows, PERIOD_ACTIVITY_KEY);
    let headcount = filter_by_key(&rows, HEADCOUNT_KEY);

    Ok(AggregatedDataset {
        companies,
        rows,
        period_activity,
        headcount,
    })
}

fn parse_one(bytes: &[u8], extractor: &dyn PdfExtractor) -> Result<ParsedDocument, C12Error> {
    let pages = extractor.extract_pages(bytes)?;
    parsing::parse_document(&pages)
}

/// Stable sort by the calendar key of each record's report month.
///
/// Keys are derived up front so a malformed month surfaces before
/// anything is reordered.
fn sort_by_month<T, F>(items: &mut Vec<T>, month_of: F) -> Result<(), C12Error>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let mut keyed: Vec<(MonthKey, T)> = Vec::with_capacity(items.len());
    for item in items.iter() {
        keyed.push((MonthKey::parse(month_of(item))?, item.clone()));
    }

    keyed.sort_by_key(|(key, _)| *key);
    *items = keyed.into_iter().map(|(_, item)| item).collect();
    Ok(())
}

fn filter_by_key(rows: &[DataRow], key: &str) -> Vec<DataRow> {
    rows.iter().filter(|r| r.filter_key == key).cloned().collect()
}
