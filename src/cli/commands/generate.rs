use crate::cli::commands::build_from_args;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        period,
        format,
        file,
        force,
    } = cmd
    {
        let file = file.as_deref().map(Path::new);
        let format = ExportFormat::resolve(*format, file)?;
        let table = build_from_args(period, cfg)?;
        ExportLogic::export(
            &table,
            format,
            file,
            cfg.output_dir.as_deref().map(Path::new),
            *force,
        )?;
    }
    Ok(())
}
