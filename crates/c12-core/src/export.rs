use crate::aggregate::AggregatedDataset;
use crate::error::C12Error;
use crate::model::{CompanyRecord, DataRow, COMPANY_COLUMNS, ROW_COLUMNS};
use rust_xlsxwriter::{Workbook, Worksheet};

/// MIME type of the produced workbook, for a download collaborator.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Sheet names, fixed, in workbook order.
pub const SHEET_COMPANIES: &str = "Thong tin cong ty";
pub const SHEET_ROWS: &str = "Bang du lieu";
pub const SHEET_PERIOD_ACTIVITY: &str = "PS trong ky";
pub const SHEET_HEADCOUNT: &str = "SL lao dong";

/// Serialize the aggregated dataset into an in-memory xlsx workbook
/// with four sheets: companies, the full row table, and the two
/// subviews. Every cell is written as a string so the locale-formatted
/// amounts survive a round trip untouched.
pub fn write_workbook(dataset: &AggregatedDataset) -> Result<Vec<u8>, C12Error> {
    let mut workbook = Workbook::new();

    write_company_sheet(workbook.add_worksheet(), &dataset.companies)?;
    write_row_sheet(workbook.add_worksheet(), SHEET_ROWS, &dataset.rows)?;
    write_row_sheet(
        workbook.add_worksheet(),
        SHEET_PERIOD_ACTIVITY,
        &dataset.period_activity,
    )?;
    write_row_sheet(workbook.add_worksheet(), SHEET_HEADCOUNT, &dataset.headcount)?;

    Ok(workbook.save_to_buffer()?)
}

/// Timestamped default file name for the produced workbook.
pub fn default_output_name() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("ketqua_tong_hop_{timestamp}.xlsx")
}

fn write_company_sheet(
    sheet: &mut Worksheet,
    companies: &[CompanyRecord],
) -> Result<(), C12Error> {
    sheet.set_name(SHEET_COMPANIES)?;
    for (col, name) in COMPANY_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, company) in companies.iter().enumerate() {
        for (col, value) in company.values().iter().enumerate() {
            sheet.write_string(i as u32 + 1, col as u16, *value)?;
        }
    }
    Ok(())
}

fn write_row_sheet(sheet: &mut Worksheet, name: &str, rows: &[DataRow]) -> Result<(), C12Error> {
    sheet.set_name(name)?;
    for (col, column_name) in ROW_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *column_name)?;
    }
    for (i, row) in rows.iter().enumerate() {
        for (col, value) in row.values().iter().enumerate() {
            sheet.write_string(i as u32 + 1, col as u16, *value)?;
        }
    }
    Ok(())
}
