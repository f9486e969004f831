use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages a timesheet can be printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Spanish,    // es
    Portuguese, // pt
    English,    // en
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Spanish, Language::Portuguese, Language::English];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::English => "en",
        }
    }

    /// Native display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::Portuguese => "Português",
            Language::English => "English",
        }
    }

    /// Accepts the two-letter code or the English name, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "es" | "spanish" => Some(Language::Spanish),
            "pt" | "portuguese" => Some(Language::Portuguese),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| AppError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
