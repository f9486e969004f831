//! Terminal output for the CLI: status lines, the config fallback notice and
//! the overwrite prompt. The calendar engine itself never prints.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// (color, icon)
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }

    // Warnings and errors stay off stdout so `show` output can be piped.
    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn emit(level: Level, msg: impl fmt::Display) {
    let (color, icon) = level.style();
    let line = format!("{color}{BOLD}{icon} {RESET}{msg}");
    if level.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Sheet title banner for `show`.
pub fn header<T: fmt::Display>(title: T) {
    let (color, _) = Level::Info.style();
    println!("{color}{BOLD}==== {title} ===={RESET}");
}

/// Config could not be used; the built-in example names take over.
pub fn config_fallback(path: &Path, reason: impl fmt::Display) {
    warning(format!(
        "Config file {} ({reason}). Using example names.",
        path.display()
    ));
    warning("To customize: run `rtimesheet init` and edit the generated file.");
}

pub fn export_done(format: &str, path: &Path) {
    success(format!("{format} timesheet written: {}", path.display()));
}

/// Ask a yes/no question on stdout and read the answer from `input`.
/// Only `y`/`yes` (any case) count as yes.
pub fn confirm<R: BufRead>(question: &str, input: &mut R) -> io::Result<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
