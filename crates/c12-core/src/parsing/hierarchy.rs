/// The five top-level section markers of the C12 report.
pub const SECTION_MARKERS: [&str; 5] = ["A", "B", "C", "D", "Đ"];

/// Running top-level section for one document's parse pass.
///
/// Created fresh per document and threaded explicitly through the row
/// loop; the current section is never shared across documents.
#[derive(Debug, Clone, Default)]
pub struct SectionState {
    current: Option<String>,
}

impl SectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Compute the filter key for a row's leading label and advance the
    /// section state.
    ///
    /// - blank label: empty key, state untouched
    /// - label is a section marker: key is the marker, state moves to it
    /// - otherwise, with a section set: key is "<section>_<label>"
    /// - otherwise: key is the label itself
    pub fn key_for(&mut self, label: &str) -> String {
        let label = label.trim();
        if label.is_empty() {
            return String::new();
        }

        if SECTION_MARKERS.contains(&label) {
            self.current = Some(label.to_string());
            return label.to_string();
        }

        match &self.current {
            Some(section) => format!("{section}_{label}"),
            None => label.to_string(),
        }
    }
}
