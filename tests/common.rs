#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Datelike, NaiveDate};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a YAML config file for a test and return its path.
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_out(name, "conf");
    fs::write(&p, yaml).expect("write test config");
    p
}

/// Monday..Friday count of a month, computed with chrono.
pub fn weekdays_in_month(year: i32, month: u32) -> usize {
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let mut count = 0;
    while d.month() == month {
        if d.weekday().num_days_from_monday() < 5 {
            count += 1;
        }
        d = d.succ_opt().expect("next day");
    }
    count
}
