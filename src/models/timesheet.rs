use crate::errors::{AppError, AppResult};
use crate::locale::{self, Labels};
use crate::models::date::CalendarDate;
use crate::models::language::Language;
use crate::models::workday::Workday;
use crate::utils::time::{format_minutes, minutes_between, parse_time};
use serde::Serialize;

/// One working day on the sheet.
///
/// The time columns start empty; they are either filled by hand on the
/// printed sheet or through [`TimesheetRow::with_times`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetRow {
    pub date: CalendarDate,
    pub weekday: Workday,
    pub weekday_name: &'static str,
    pub month_name: &'static str,
    pub entry_time: Option<String>,
    pub exit_time: Option<String>,
    pub total_hours: Option<String>,
    pub balance: Option<String>,
}

impl TimesheetRow {
    pub fn weekday_index(&self) -> usize {
        self.weekday.index()
    }

    /// Return a copy of this row with entry/exit recorded and the derived
    /// columns computed against `workday_minutes`.
    ///
    /// Times are `HH:MM`. An exit earlier than the entry is rejected.
    pub fn with_times(&self, entry: &str, exit: &str, workday_minutes: i64) -> AppResult<Self> {
        let start = parse_time(entry).ok_or_else(|| AppError::InvalidTime(entry.to_string()))?;
        let end = parse_time(exit).ok_or_else(|| AppError::InvalidTime(exit.to_string()))?;

        let worked = minutes_between(start, end);
        if worked < 0 {
            return Err(AppError::InvalidTime(format!(
                "exit {exit} is before entry {entry}"
            )));
        }

        Ok(Self {
            entry_time: Some(start.format("%H:%M").to_string()),
            exit_time: Some(end.format("%H:%M").to_string()),
            total_hours: Some(format_minutes(worked, false)),
            balance: Some(format_minutes(worked - workday_minutes, true)),
            ..self.clone()
        })
    }

    /// Minutes in the total-hours column, if it has been filled.
    pub fn worked_minutes(&self) -> Option<i64> {
        let total = self.total_hours.as_deref()?;
        let (h, m) = total.split_once(':')?;
        Some(h.parse::<i64>().ok()? * 60 + m.parse::<i64>().ok()?)
    }
}

/// The full sheet for one period, as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetTable {
    pub employee: String,
    pub supervisor: String,
    pub period_label: String,
    pub month_name: &'static str,
    pub language: Language,
    pub year: i32,
    pub month: u32,
    pub start_day: u32,
    pub rows: Vec<TimesheetRow>,
}

impl TimesheetTable {
    pub fn labels(&self) -> &'static Labels {
        &locale::lookup(self.language).labels
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the filled total-hours cells, in minutes.
    pub fn total_minutes(&self) -> i64 {
        self.rows.iter().filter_map(TimesheetRow::worked_minutes).sum()
    }

    /// `timesheet_<first name>_<month>_<year>.<ext>`, lowercase.
    pub fn default_filename(&self, ext: &str) -> String {
        let first = self
            .employee
            .split_whitespace()
            .next()
            .unwrap_or("employee")
            .to_lowercase();
        format!(
            "timesheet_{}_{}_{}.{}",
            first,
            self.month_name.to_lowercase(),
            self.year,
            ext
        )
    }
}
