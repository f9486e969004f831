//! Time utilities: parsing HH:MM, durations and minute formatting.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// `HH:MM`; with `want_sign` a leading `+`/`-` is added (zero gets none).
pub fn format_minutes(mins: i64, want_sign: bool) -> String {
    let sign = if mins < 0 {
        "-"
    } else if mins > 0 && want_sign {
        "+"
    } else {
        ""
    };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Parse a duration such as `8h`, `7h30m`, `45m` or `7:30` into minutes.
pub fn parse_duration_minutes(s: &str) -> Option<i64> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    if let Some((h, m)) = s.split_once(':') {
        let h: i64 = h.parse().ok()?;
        let m: i64 = m.parse().ok()?;
        return (m < 60).then_some(h * 60 + m);
    }

    let (hours, rest) = match s.split_once('h') {
        Some((h, rest)) => (h.parse::<i64>().ok()?, rest),
        None => (0, s.as_str()),
    };

    let minutes = if rest.is_empty() {
        0
    } else {
        rest.strip_suffix('m')?.parse::<i64>().ok()?
    };

    Some(hours * 60 + minutes)
}
