// src/export/mod.rs

mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;

pub use json_csv::{CsvRenderer, JsonRenderer};
pub use logic::ExportLogic;
pub use model::RowExport;
pub use pdf::PdfManager;
pub use pdf_export::PdfRenderer;

pub(crate) use model::{row_to_cells, sheet_headers};

use crate::errors::{AppError, AppResult};
use crate::models::TimesheetTable;
use clap::ValueEnum;
use std::path::Path;
use std::str::FromStr;

/// Turns a finished table into a file.
pub trait DocumentRenderer {
    fn render(&self, table: &TimesheetTable, path: &Path) -> AppResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// An explicit `--format` wins; otherwise the output file's extension
    /// decides, and with neither the sheet is a PDF.
    pub fn resolve(explicit: Option<ExportFormat>, file: Option<&Path>) -> AppResult<Self> {
        if let Some(f) = explicit {
            return Ok(f);
        }

        match file.and_then(|f| f.extension()) {
            Some(ext) => ext.to_string_lossy().parse(),
            None => Ok(ExportFormat::Pdf),
        }
    }

    pub fn renderer(&self) -> Box<dyn DocumentRenderer> {
        match self {
            ExportFormat::Pdf => Box::new(PdfRenderer),
            ExportFormat::Csv => Box::new(CsvRenderer),
            ExportFormat::Json => Box::new(JsonRenderer),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}
