pub mod csv;

use crate::core::errors::SplitsheetError;

/// A rendered export, held entirely in memory.
#[derive(Clone, Debug)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Renders rows of JSON objects into a downloadable table.
///
/// `columns` lists `(key, display_name)` pairs in output order. Display names
/// form the header row; each cell is looked up in the row by key.
pub trait ExportWriter: Send + Sync {
    fn write_table(
        &self,
        file_name: &str,
        rows: &[serde_json::Value],
        columns: &[(&str, &str)],
    ) -> Result<ExportFile, SplitsheetError>;
}
