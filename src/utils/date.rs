use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// (year, month) of the local current date.
pub fn current_year_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month())
}
