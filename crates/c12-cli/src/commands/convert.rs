use c12_core::aggregate::{BatchEvent, DocumentInput};
use c12_core::export;
use c12_core::extraction::pdftotext::PdftotextExtractor;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    files: Vec<PathBuf>,
    out: Option<PathBuf>,
    preview: bool,
) -> Result<(), c12_core::error::C12Error> {
    let mut inputs = Vec::with_capacity(files.len());
    for path in &files {
        inputs.push(DocumentInput {
            file_name: display_name(path),
            bytes: std::fs::read(path)?,
        });
    }

    let extractor = PdftotextExtractor::new();
    let (dataset, workbook) =
        c12_core::convert_documents(&inputs, &extractor, |event| match event {
            BatchEvent::Progress { fraction, status } => {
                eprintln!("[{:>3.0}%] {status}", fraction * 100.0);
            }
            BatchEvent::DocumentFailed(failure) => {
                eprintln!("{failure}");
            }
        })?;

    let out_path = out.unwrap_or_else(|| PathBuf::from(export::default_output_name()));
    std::fs::write(&out_path, workbook)?;
    eprintln!(
        "Wrote {} company record(s) and {} data row(s) to {}",
        dataset.companies.len(),
        dataset.rows.len(),
        out_path.display()
    );

    if preview {
        output::table::print_dataset(&dataset);
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
