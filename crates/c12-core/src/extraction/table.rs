use crate::extraction::PageContent;

/// Reconstruct the data table from pdftotext -layout output.
///
/// `-layout` preserves column alignment using spaces, so the table body
/// is a block of lines sharing vertical whitespace gutters. Cells are
/// recovered by intersecting those gutters across every line of the
/// block, which keeps empty cells in place — a row carrying only a
/// section marker still comes back with its full cell count.
///
/// Only the first table found on a page is returned; the C12 layout has
/// one data table per page and anything after it is footer material.
pub fn first_table(page: &PageContent) -> Option<Vec<Vec<String>>> {
    let (start, end) = table_region(&page.lines)?;

    let body: Vec<&str> = page.lines[start..end]
        .iter()
        .map(String::as_str)
        .filter(|l| !is_separator_line(l))
        .collect();
    if body.is_empty() {
        return None;
    }

    let ranges = column_ranges(&body);
    Some(body.iter().map(|l| split_cells(l, &ranges)).collect())
}

/// Detect if a line looks like the data-table header row. Requires the
/// leading-column label so that the page title (which also name-drops
/// the insurance funds) is not mistaken for the table.
fn is_table_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    (lower.contains("stt") || lower.contains("nội dung")) && header_keyword_count(&lower) >= 2
}

/// Continuation rows of a stacked header carry fund labels but not the
/// leading-column label.
fn is_header_continuation(line: &str) -> bool {
    header_keyword_count(&line.to_lowercase()) >= 2
}

fn header_keyword_count(lower: &str) -> usize {
    ["stt", "nội dung", "bhxh", "bhyt", "bhtn", "cộng"]
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count()
}

/// A line made of nothing but ruling characters.
fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| matches!(c, '=' | '-' | '+' | '|'))
}

/// Find the first table region within page lines: data starts after the
/// header row(s) and ends at the first blank line. Later headers on the
/// same page are ignored.
fn table_region(lines: &[String]) -> Option<(usize, usize)> {
    let mut start: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        match start {
            None => {
                if is_table_header(line) {
                    start = Some(i + 1);
                }
            }
            Some(s) => {
                // Stacked headers: keep moving the start down while
                // header rows keep coming.
                if i == s && is_header_continuation(line) {
                    start = Some(i + 1);
                    continue;
                }
                if line.trim().is_empty() {
                    return if i > s { Some((s, i)) } else { None };
                }
            }
        }
    }

    match start {
        Some(s) if lines.len() > s => Some((s, lines.len())),
        _ => None,
    }
}

/// Character ranges of the table columns, computed over all body lines.
///
/// A character position belongs to a gutter when every line is
/// whitespace (or already ended) there; gutter runs must be at least 2
/// wide so that ordinary single spaces inside a description cell never
/// split a column.
fn column_ranges(lines: &[&str]) -> Vec<(usize, usize)> {
    let rows: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);

    let mut gap = vec![true; width];
    for row in &rows {
        for (p, slot) in gap.iter_mut().enumerate() {
            if let Some(c) = row.get(p) {
                if !c.is_whitespace() {
                    *slot = false;
                }
            }
        }
    }

    // Widen: only runs of 2+ gap columns count as gutters.
    let mut gutter = vec![false; width];
    let mut p = 0;
    while p < width {
        if gap[p] {
            let run_start = p;
            while p < width && gap[p] {
                p += 1;
            }
            if p - run_start >= 2 {
                for slot in gutter.iter_mut().take(p).skip(run_start) {
                    *slot = true;
                }
            }
        } else {
            p += 1;
        }
    }

    // Cells are the maximal non-gutter runs.
    let mut ranges = Vec::new();
    let mut p = 0;
    while p < width {
        if !gutter[p] {
            let cell_start = p;
            while p < width && !gutter[p] {
                p += 1;
            }
            ranges.push((cell_start, p));
        } else {
            p += 1;
        }
    }

    ranges
}

/// Cut one line into trimmed cells along the shared column ranges.
fn split_cells(line: &str, ranges: &[(usize, usize)]) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    ranges
        .iter()
        .map(|&(start, end)| {
            if start >= chars.len() {
                String::new()
            } else {
                chars[start..end.min(chars.len())]
                    .iter()
                    .collect::<String>()
                    .trim()
                    .to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> PageContent {
        PageContent {
            page_number: 1,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Pad 8 cells into an aligned fixture line (char-count padding,
    /// matching how the extractor indexes by chars).
    fn row8(cells: [&str; 8]) -> String {
        const WIDTHS: [usize; 8] = [6, 26, 12, 12, 10, 10, 12, 10];
        let mut line = String::new();
        for (cell, width) in cells.iter().zip(WIDTHS) {
            line.push_str(cell);
            let pad = width.saturating_sub(cell.chars().count());
            line.extend(std::iter::repeat(' ').take(pad));
        }
        line
    }

    #[test]
    fn detects_header_row() {
        assert!(is_table_header(
            "STT      Nội dung                  BHXH         BHYT"
        ));
        assert!(!is_table_header("B     Phát sinh trong kỳ"));
    }

    #[test]
    fn page_title_is_not_a_header() {
        assert!(!is_table_header(
            "THÔNG BÁO KẾT QUẢ ĐÓNG BHXH, BHYT, BHTN, BHTNLĐ, BNN"
        ));
    }

    #[test]
    fn separator_lines_are_recognized() {
        assert!(is_separator_line("==========================="));
        assert!(is_separator_line("  ----+----+----  "));
        assert!(!is_separator_line("A    Kỳ trước mang sang"));
        assert!(!is_separator_line(""));
    }

    #[test]
    fn first_table_splits_aligned_rows() {
        let p = page(&[
            "Một số dòng tiêu đề",
            "STT   Nội dung                  BHXH_OD_TS  BHXH_HTTT   BHYT      BHTN      BHTNLD_BNN  Cộng",
            &row8(["A", "Kỳ trước mang sang", "1.000", "2.000", "300", "400", "500", "2.200"]),
            &row8(["1", "Phải đóng", "5.000", "6.000", "700", "800", "900", "13.400"]),
            "",
            "Chân trang",
        ]);

        let table = first_table(&p).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].len(), 8);
        assert_eq!(table[0][0], "A");
        assert_eq!(table[0][1], "Kỳ trước mang sang");
        assert_eq!(table[0][7], "2.200");
        assert_eq!(table[1][0], "1");
        assert_eq!(table[1][3], "6.000");
    }

    #[test]
    fn marker_only_row_keeps_empty_cells() {
        let p = page(&[
            "STT   Nội dung                  BHXH        BHYT",
            &row8(["Đ", "", "", "", "", "", "", ""]),
            &row8(["1", "Số lao động", "10", "10", "10", "10", "10", "50"]),
        ]);

        let table = first_table(&p).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].len(), 8);
        assert_eq!(table[0][0], "Đ");
        assert!(table[0][1..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn ruling_lines_are_dropped_from_the_grid() {
        let p = page(&[
            "STT   Nội dung                  BHXH        BHYT",
            "--------------------------------------------------------------------------------------------------",
            &row8(["B", "Phát sinh trong kỳ", "1", "2", "3", "4", "5", "15"]),
        ]);

        let table = first_table(&p).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0][0], "B");
    }

    #[test]
    fn only_the_first_table_per_page_is_used() {
        let p = page(&[
            "STT   Nội dung                  BHXH        BHYT",
            &row8(["A", "Kỳ trước mang sang", "1", "2", "3", "4", "5", "15"]),
            "",
            "STT   Nội dung                  BHXH        BHYT",
            &row8(["B", "Bảng thứ hai", "9", "9", "9", "9", "9", "45"]),
        ]);

        let table = first_table(&p).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0][0], "A");
    }

    #[test]
    fn page_without_header_has_no_table() {
        let p = page(&["Chỉ có văn bản tự do", "không có bảng nào ở đây"]);
        assert!(first_table(&p).is_none());
    }

    #[test]
    fn multi_line_header_starts_after_last_header_row() {
        let p = page(&[
            "STT   Nội dung                  BHXH_OD_TS  BHXH_HTTT   BHYT",
            "      (chi tiết)                BHTN        BHTNLD_BNN  Cộng",
            &row8(["C", "Điều chỉnh", "1", "2", "3", "4", "5", "15"]),
        ]);

        let table = first_table(&p).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0][0], "C");
    }
}
