//! Proleptic Gregorian calendar arithmetic.

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (1..=12). `None` for any other month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// Days since 1970-01-01 (negative before it).
///
/// Shifts the year to start in March so the leap day is the last day of the
/// shifted year, then counts whole 400-year eras.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let m = i64::from(month);
    let mp = (m + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Monday-first weekday index: 0 = Monday .. 6 = Sunday.
pub fn weekday_index(year: i32, month: u32, day: u32) -> usize {
    // 1970-01-01 was a Thursday (index 3).
    (days_from_civil(year, month, day) + 3).rem_euclid(7) as usize
}
