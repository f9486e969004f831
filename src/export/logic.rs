// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::TimesheetTable;
use crate::ui::messages::{confirm, info, warning};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// High-level export entry point used by the CLI.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` in `format`.
    ///
    /// - `file`: explicit output path; when `None` the default file name is
    ///   placed in `output_dir` (or the current directory).
    /// - `force`: overwrite without asking.
    ///
    /// Returns the path that was written.
    pub fn export(
        table: &TimesheetTable,
        format: ExportFormat,
        file: Option<&Path>,
        output_dir: Option<&Path>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let stdin = io::stdin();
        Self::export_with_input(table, format, file, output_dir, force, &mut stdin.lock())
    }

    /// Same as [`ExportLogic::export`], reading the overwrite answer from `input`.
    pub fn export_with_input<R: BufRead>(
        table: &TimesheetTable,
        format: ExportFormat,
        file: Option<&Path>,
        output_dir: Option<&Path>,
        force: bool,
        input: &mut R,
    ) -> AppResult<PathBuf> {
        let path = Self::resolve_path(table, format, file, output_dir);

        Self::confirm_overwrite(&path, force, input)?;

        // only once the user agreed, so a refusal leaves nothing behind
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if table.is_empty() {
            warning("No working days in the selected period: the sheet has no day rows.");
        }

        format.renderer().render(table, &path)?;
        Ok(path)
    }

    /// A new file is always fine; an existing one needs `force` or a "yes".
    fn confirm_overwrite<R: BufRead>(path: &Path, force: bool, input: &mut R) -> AppResult<()> {
        if force || !path.exists() {
            return Ok(());
        }

        warning(format!("The file '{}' already exists.", path.display()));
        if confirm("Overwrite?", input)? {
            info("Existing file will be overwritten.");
            Ok(())
        } else {
            Err(AppError::Export(format!(
                "{} already exists and was not overwritten",
                path.display()
            )))
        }
    }

    pub fn resolve_path(
        table: &TimesheetTable,
        format: ExportFormat,
        file: Option<&Path>,
        output_dir: Option<&Path>,
    ) -> PathBuf {
        match file {
            Some(f) => f.to_path_buf(),
            None => {
                let name = table.default_filename(format.as_str());
                match output_dir {
                    Some(dir) => dir.join(name),
                    None => PathBuf::from(name),
                }
            }
        }
    }
}
