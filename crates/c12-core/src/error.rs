#[derive(Debug, thiserror::Error)]
pub enum C12Error {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to parse report: {0}")]
    ParseError(String),

    #[error("cannot derive a chronological key from report month '{month}'")]
    MonthKey { month: String },

    #[error("no data: no uploaded document produced both company info and table rows")]
    NoData,

    #[error("spreadsheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
