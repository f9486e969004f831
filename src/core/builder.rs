//! Period builder: turns a (year, month, start day, language) request into
//! the ordered list of working-day rows for that month.

use crate::core::calendar::{days_in_month, weekday_index};
use crate::errors::{AppError, AppResult};
use crate::locale;
use crate::models::{CalendarDate, Language, TimesheetRow, TimesheetTable, Workday};

/// A validated request: `start_day..=last day of month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    year: i32,
    month: u32,
    start_day: u32,
    last_day: u32,
}

impl Period {
    /// Checks `year >= 1`, `month` in 1..=12 and `1 <= start_day <= month length`.
    /// Nothing is ever clamped.
    pub fn new(year: i32, month: u32, start_day: u32) -> AppResult<Self> {
        if year < 1 {
            return Err(AppError::InvalidPeriod(format!(
                "year {year} is out of range (must be >= 1)"
            )));
        }

        let last_day = days_in_month(year, month).ok_or_else(|| {
            AppError::InvalidPeriod(format!("month {month} is out of range (must be 1-12)"))
        })?;

        if start_day < 1 {
            return Err(AppError::InvalidPeriod(
                "start day must be at least 1".to_string(),
            ));
        }

        if start_day > last_day {
            return Err(AppError::InvalidPeriod(format!(
                "start day {start_day} is past the end of {year}-{month:02} ({last_day} days)"
            )));
        }

        Ok(Self {
            year,
            month,
            start_day,
            last_day,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn start_day(&self) -> u32 {
        self.start_day
    }

    pub fn last_day(&self) -> u32 {
        self.last_day
    }

    /// Monday..Friday dates of the period, ascending.
    pub fn workdays(&self) -> impl Iterator<Item = (CalendarDate, Workday)> + '_ {
        (self.start_day..=self.last_day).filter_map(move |day| {
            Workday::from_index(weekday_index(self.year, self.month, day))
                .map(|wd| (CalendarDate::new(self.year, self.month, day), wd))
        })
    }
}

/// Validate the request and build the sheet.
pub fn build(
    year: i32,
    month: u32,
    start_day: u32,
    employee_name: &str,
    supervisor_name: &str,
    language: Language,
) -> AppResult<TimesheetTable> {
    let period = Period::new(year, month, start_day)?;
    Ok(build_period(&period, employee_name, supervisor_name, language))
}

/// Build the sheet for an already validated period. Cannot fail.
pub fn build_period(
    period: &Period,
    employee_name: &str,
    supervisor_name: &str,
    language: Language,
) -> TimesheetTable {
    let loc = locale::lookup(language);
    // Period::new already rejected months outside 1..=12
    let month_name = loc.months[(period.month - 1) as usize];

    let rows = period
        .workdays()
        .map(|(date, weekday)| TimesheetRow {
            date,
            weekday,
            weekday_name: loc.workday_name(weekday),
            month_name,
            entry_time: None,
            exit_time: None,
            total_hours: None,
            balance: None,
        })
        .collect();

    TimesheetTable {
        employee: employee_name.to_string(),
        supervisor: supervisor_name.to_string(),
        period_label: format!("{} {}", month_name, period.year),
        month_name,
        language,
        year: period.year,
        month: period.month,
        start_day: period.start_day,
        rows,
    }
}
