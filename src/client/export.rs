// src/client/export.rs
// DOCUMENTATION: CSV export of selected shops
// PURPOSE: Turn the selection into a two-column (name, phone) CSV file

use crate::client::SelectableShop;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name offered for download
pub const EXPORT_FILE_NAME: &str = "data.csv";

/// Failures while building or saving an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A ready-to-save CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub contents: String,
}

impl CsvExport {
    /// Write the file into `dir`, returning the full path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.contents)?;
        log::info!("Exported {} bytes to {}", self.contents.len(), path.display());
        Ok(path)
    }
}

/// Render the selected entries as CSV
/// DOCUMENTATION: One `"name","phone"` row per selected entry, every field
/// quoted, rows joined by `\n`, no header and no trailing newline.
pub fn to_csv(shops: &[SelectableShop]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for entry in shops.iter().filter(|entry| entry.selected) {
        writer.write_record([entry.shop.name(), entry.shop.phone().unwrap_or_default()])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut contents = String::from_utf8(bytes)?;
    if contents.ends_with('\n') {
        contents.pop();
    }
    Ok(contents)
}

/// Build the export for a selection
pub fn export_selected(shops: &[SelectableShop]) -> Result<CsvExport, ExportError> {
    Ok(CsvExport {
        file_name: EXPORT_FILE_NAME,
        contents: to_csv(shops)?,
    })
}
