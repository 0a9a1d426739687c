use c12_core::aggregate::AggregatedDataset;
use c12_core::export;
use c12_core::model::{CompanyRecord, DataRow, COMPANY_COLUMNS, ROW_COLUMNS};
use c12_core::parsing::ParsedDocument;

pub fn print_document(doc: &ParsedDocument) {
    print_companies("Company", std::slice::from_ref(&doc.company));
    println!();
    print_rows("Rows", &doc.rows);
}

pub fn print_dataset(dataset: &AggregatedDataset) {
    print_companies(export::SHEET_COMPANIES, &dataset.companies);
    println!();
    print_rows(export::SHEET_ROWS, &dataset.rows);
    println!();
    print_rows(export::SHEET_PERIOD_ACTIVITY, &dataset.period_activity);
    println!();
    print_rows(export::SHEET_HEADCOUNT, &dataset.headcount);
}

fn print_companies(title: &str, companies: &[CompanyRecord]) {
    let rows: Vec<Vec<&str>> = companies.iter().map(|c| c.values().to_vec()).collect();
    print_table(title, &COMPANY_COLUMNS, &rows);
}

fn print_rows(title: &str, data_rows: &[DataRow]) {
    let rows: Vec<Vec<&str>> = data_rows.iter().map(|r| r.values().to_vec()).collect();
    print_table(title, &ROW_COLUMNS, &rows);
}

fn print_table(title: &str, columns: &[&str], rows: &[Vec<&str>]) {
    println!("=== {title} ===");
    if rows.is_empty() {
        println!("  (empty)");
        return;
    }

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(col.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    print_line(columns, &widths);
    for row in rows {
        print_line(row, &widths);
    }
}

fn print_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        line.push_str("  ");
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    println!("{}", line.trim_end());
}
