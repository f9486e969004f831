// src/export/model.rs

use crate::locale::Labels;
use crate::models::TimesheetRow;
use serde::Serialize;

/// Flat per-day record for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub date: String,
    pub weekday_index: usize,
    pub weekday: String,
    pub month: String,
    pub entry_time: String,
    pub exit_time: String,
    pub total_hours: String,
    pub balance: String,
}

impl From<&TimesheetRow> for RowExport {
    fn from(r: &TimesheetRow) -> Self {
        Self {
            date: r.date.iso(),
            weekday_index: r.weekday_index(),
            weekday: r.weekday_name.to_string(),
            month: r.month_name.to_string(),
            entry_time: r.entry_time.clone().unwrap_or_default(),
            exit_time: r.exit_time.clone().unwrap_or_default(),
            total_hours: r.total_hours.clone().unwrap_or_default(),
            balance: r.balance.clone().unwrap_or_default(),
        }
    }
}

/// Localized column headers, in sheet order.
pub(crate) fn sheet_headers(labels: &Labels) -> [&'static str; 6] {
    [
        labels.date,
        labels.day,
        labels.entry_time,
        labels.exit_time,
        labels.total_hours,
        labels.balance,
    ]
}

/// Printed cells for one day (PDF and terminal).
pub(crate) fn row_to_cells(r: &TimesheetRow) -> Vec<String> {
    vec![
        r.date.to_string(),
        r.weekday_name.to_string(),
        r.entry_time.clone().unwrap_or_default(),
        r.exit_time.clone().unwrap_or_default(),
        r.total_hours.clone().unwrap_or_default(),
        r.balance.clone().unwrap_or_default(),
    ]
}
