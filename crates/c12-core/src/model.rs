use crate::error::C12Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column headers of the company-info sheet, in output order.
pub const COMPANY_COLUMNS: [&str; 4] = ["Tháng", "Tên công ty", "Mã đơn vị", "Điện thoại"];

/// Column headers of the data sheet, in output order.
///
/// Table cells 0..=7 map positionally onto the last eight names; the
/// same constant drives both row construction and spreadsheet export.
pub const ROW_COLUMNS: [&str; 10] = [
    "Tháng",
    "Filter",
    "STT",
    "Nội dung",
    "BHXH_OD_TS",
    "BHXH_HTTT",
    "BHYT",
    "BHTN",
    "BHTNLD_BNN",
    "Cộng",
];

/// Company metadata pulled from the first page of one C12 document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Report month as "M/YYYY", or empty if the header phrase was absent.
    pub report_month: String,
    pub company_name: String,
    pub unit_code: String,
    pub phone: String,
}

impl CompanyRecord {
    pub fn values(&self) -> [&str; 4] {
        [
            &self.report_month,
            &self.company_name,
            &self.unit_code,
            &self.phone,
        ]
    }
}

/// One qualifying table row from a C12 document.
///
/// Amount fields are kept as the raw cell text; the report uses
/// locale-formatted numbers and the spreadsheet round-trip must be
/// lossless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRow {
    pub report_month: String,
    /// Two-level classification key: empty, a bare section marker, or
    /// "<marker>_<label>".
    pub filter_key: String,
    pub sequence_label: String,
    pub description: String,
    pub bhxh_od_ts: String,
    pub bhxh_ht_tt: String,
    pub bhyt: String,
    pub bhtn: String,
    pub bhtnld_bnn: String,
    pub total: String,
}

impl DataRow {
    pub fn values(&self) -> [&str; 10] {
        [
            &self.report_month,
            &self.filter_key,
            &self.sequence_label,
            &self.description,
            &self.bhxh_od_ts,
            &self.bhxh_ht_tt,
            &self.bhyt,
            &self.bhtn,
            &self.bhtnld_bnn,
            &self.total,
        ]
    }
}

/// Chronological sort key derived from a "M/YYYY" report month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Parse "M/YYYY" into a calendar key.
    ///
    /// An empty or malformed month is an error: a single bad key would
    /// corrupt the combined chronological sort, so the caller aborts
    /// aggregation rather than guessing.
    pub fn parse(s: &str) -> Result<MonthKey, C12Error> {
        let bad = || C12Error::MonthKey {
            month: s.to_string(),
        };

        let (month_part, year_part) = s.trim().split_once('/').ok_or_else(bad)?;
        let month: u32 = month_part.trim().parse().map_err(|_| bad())?;
        let year: i32 = year_part.trim().parse().map_err(|_| bad())?;

        // Reject month 0, month 13, etc. via a real calendar check.
        chrono::NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(bad)?;

        Ok(MonthKey { year, month })
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
