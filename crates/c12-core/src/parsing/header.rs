use crate::model::CompanyRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// "Tháng <n> năm <n>" — the fixed month phrase of the C12 header.
/// Tolerates stray whitespace between the words and the numerals.
static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Tháng\s*(\d+)\s*năm\s*(\d+)").expect("month pattern"));

/// Extract the report month from free header text as "M/YYYY".
///
/// Returns an empty string when the phrase is absent; downstream treats
/// that as a valid sentinel until aggregation needs a sort key.
pub fn extract_month(text: &str) -> String {
    match MONTH_RE.captures(text) {
        Some(caps) => format!("{}/{}", &caps[1], &caps[2]),
        None => String::new(),
    }
}

/// Scan first-page lines for the three fixed company labels and
/// assemble one CompanyRecord. For each label the first matching line
/// wins; a missing label leaves its field empty.
pub fn parse_company(lines: &[&str], report_month: &str) -> CompanyRecord {
    let mut company = CompanyRecord {
        report_month: report_month.to_string(),
        ..Default::default()
    };

    for line in lines {
        if company.company_name.is_empty() {
            if let Some(rest) = value_after(line, "Kính gửi:") {
                company.company_name = rest.to_string();
            }
        }
        if company.unit_code.is_empty() {
            if let Some(rest) = value_after(line, "Mã đơn vị:") {
                // The phone label usually sits on the same line; the code
                // runs up to it.
                let code = match rest.find("Điện") {
                    Some(idx) => rest[..idx].trim(),
                    None => rest,
                };
                company.unit_code = code.to_string();
            }
        }
        if company.phone.is_empty() {
            if let Some(rest) = value_after(line, "Điện thoại:") {
                company.phone = rest.to_string();
            }
        }
    }

    company
}

fn value_after<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let idx = line.find(label)?;
    Some(line[idx + label.len()..].trim())
}
