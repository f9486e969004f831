// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::RowExport;
use crate::export::DocumentRenderer;
use crate::models::TimesheetTable;
use crate::ui::messages::{export_done, info};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The whole table (header metadata + rows), pretty-printed.
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn render(&self, table: &TimesheetTable, path: &Path) -> AppResult<()> {
        info(format!("Exporting to JSON: {}", path.display()));

        let json_data = serde_json::to_string_pretty(table)
            .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

        let mut file = File::create(path)?;
        file.write_all(json_data.as_bytes())?;

        export_done("JSON", path);
        Ok(())
    }
}

/// One line per working day; header comes from serde field names.
pub struct CsvRenderer;

impl DocumentRenderer for CsvRenderer {
    fn render(&self, table: &TimesheetTable, path: &Path) -> AppResult<()> {
        info(format!("Exporting to CSV: {}", path.display()));

        let mut wtr = csv::Writer::from_path(path)
            .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

        if table.is_empty() {
            wtr.write_record([
                "date",
                "weekday_index",
                "weekday",
                "month",
                "entry_time",
                "exit_time",
                "total_hours",
                "balance",
            ])
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        }

        for row in &table.rows {
            wtr.serialize(RowExport::from(row))
                .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        }

        wtr.flush()?;

        export_done("CSV", path);
        Ok(())
    }
}
