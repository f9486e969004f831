// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::pdf::PdfManager;
use crate::export::DocumentRenderer;
use crate::models::TimesheetTable;
use crate::ui::messages::{export_done, info};
use std::path::Path;

pub struct PdfRenderer;

impl DocumentRenderer for PdfRenderer {
    fn render(&self, table: &TimesheetTable, path: &Path) -> AppResult<()> {
        info(format!("Exporting to PDF: {}", path.display()));

        let mut pdf = PdfManager::new();
        pdf.write_timesheet(table);

        pdf.save(path)
            .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

        export_done("PDF", path);
        Ok(())
    }
}
