pub mod config;
pub mod generate;
pub mod init;
pub mod show;

use crate::cli::parser::PeriodArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Language, TimesheetTable};
use crate::utils::date::current_year_month;

/// Fill the gaps in the CLI arguments from the config and build the table.
pub(crate) fn build_from_args(args: &PeriodArgs, cfg: &Config) -> AppResult<TimesheetTable> {
    let (cur_year, cur_month) = current_year_month();

    let language: Language = match &args.lang {
        Some(code) => code.parse()?,
        None => cfg.language()?,
    };

    let employee = args.employee.as_deref().unwrap_or(&cfg.default_employee);
    let supervisor = args.supervisor.as_deref().unwrap_or(&cfg.default_supervisor);

    let mut table = crate::core::build(
        args.year.unwrap_or(cur_year),
        args.month.unwrap_or(cur_month),
        args.start_day,
        employee,
        supervisor,
        language,
    )?;

    if let Some(schedule) = &args.fill {
        let (entry, exit) = schedule
            .split_once('-')
            .ok_or_else(|| AppError::InvalidTime(format!("{schedule} (expected HH:MM-HH:MM)")))?;
        let workday = cfg.workday_minutes()?;
        table.rows = table
            .rows
            .iter()
            .map(|row| row.with_times(entry, exit, workday))
            .collect::<AppResult<Vec<_>>>()?;
    }

    Ok(table)
}
