use crate::core::errors::SplitsheetError;
use crate::infrastructure::export::{ExportFile, ExportWriter};
use csv::Writer;
use serde_json::Value;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

#[derive(Clone, Copy, Debug, Default)]
pub struct CsvExportWriter;

impl CsvExportWriter {
    pub fn new() -> Self {
        CsvExportWriter
    }
}

impl ExportWriter for CsvExportWriter {
    fn write_table(
        &self,
        file_name: &str,
        rows: &[Value],
        columns: &[(&str, &str)],
    ) -> Result<ExportFile, SplitsheetError> {
        let mut writer = Writer::from_writer(vec![]);

        writer
            .write_record(columns.iter().map(|(_, display_name)| *display_name))
            .map_err(|e| SplitsheetError::BalanceSheetGeneration(format!("failed to write header: {}", e)))?;

        for row in rows {
            let record = columns.iter().map(|(key, _)| render_cell(row.get(*key)));
            writer
                .write_record(record)
                .map_err(|e| SplitsheetError::BalanceSheetGeneration(format!("failed to write row: {}", e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SplitsheetError::BalanceSheetGeneration(format!("failed to finalize export: {}", e)))?;

        Ok(ExportFile {
            file_name: file_name.to_string(),
            content_type: CSV_CONTENT_TYPE,
            bytes,
        })
    }
}

fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.is_f64() => match n.as_f64() {
            Some(f) => format!("{:.2}", f),
            None => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}
