pub mod header;
pub mod hierarchy;

use crate::error::C12Error;
use crate::extraction::{table, PageContent};
use crate::model::{CompanyRecord, DataRow};
use hierarchy::SectionState;
use serde::{Deserialize, Serialize};

/// A table row that was seen but did not qualify as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRow {
    pub page_number: usize,
    pub row_text: String,
    pub reason: String,
}

/// Everything extracted from one C12 document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub company: CompanyRecord,
    pub rows: Vec<DataRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_rows: Vec<SkippedRow>,
}

/// Parse extracted page content into company info and classified rows.
///
/// Page 1 carries the header block (report month and company labels);
/// every page, page 1 included, may carry one data table. The section
/// state starts unset and is threaded through the rows of the whole
/// document in page order.
pub fn parse_document(pages: &[PageContent]) -> Result<ParsedDocument, C12Error> {
    let first_page = pages
        .first()
        .ok_or_else(|| C12Error::ParseError("no text content found in PDF".into()))?;

    let page_text = first_page.lines.join("\n");
    let month = header::extract_month(&page_text);

    let line_refs: Vec<&str> = first_page.lines.iter().map(String::as_str).collect();
    let company = header::parse_company(&line_refs, &month);

    let mut rows = Vec::new();
    let mut skipped_rows = Vec::new();
    let mut state = SectionState::new();

    for page in pages {
        let Some(cells_by_row) = table::first_table(page) else {
            continue;
        };

        for cells in cells_by_row {
            if cells.len() < 8 {
                skipped_rows.push(SkippedRow {
                    page_number: page.page_number,
                    row_text: cells.join(" | "),
                    reason: format!("{} column(s), need 8", cells.len()),
                });
                continue;
            }
            if !is_data_row(&cells) {
                skipped_rows.push(SkippedRow {
                    page_number: page.page_number,
                    row_text: cells.join(" | "),
                    reason: "blank or separator-only row".into(),
                });
                continue;
            }

            let filter_key = state.key_for(&cells[0]);
            rows.push(DataRow {
                report_month: month.clone(),
                filter_key,
                sequence_label: cells[0].clone(),
                description: cells[1].clone(),
                bhxh_od_ts: cells[2].clone(),
                bhxh_ht_tt: cells[3].clone(),
                bhyt: cells[4].clone(),
                bhtn: cells[5].clone(),
                bhtnld_bnn: cells[6].clone(),
                total: cells[7].clone(),
            });
        }
    }

    Ok(ParsedDocument {
        company,
        rows,
        skipped_rows,
    })
}

/// A row qualifies when at least one cell carries something other than
/// blanks or ruling marks.
fn is_data_row(cells: &[String]) -> bool {
    cells
        .iter()
        .any(|c| !c.trim().is_empty() && !c.contains("==="))
}
