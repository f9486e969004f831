use crate::errors::{AppError, AppResult};
use crate::models::Language;
use crate::ui::messages::config_fallback;
use crate::utils::time::parse_duration_minutes;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_EMPLOYEE: &str = "Maria Elena Rodriguez Garcia";
pub const DEFAULT_SUPERVISOR: &str = "Carlos Alberto Martinez Silva";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_employee")]
    pub default_employee: String,
    #[serde(default = "default_supervisor")]
    pub default_supervisor: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_workday_duration")]
    pub workday_duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

fn default_employee() -> String {
    DEFAULT_EMPLOYEE.to_string()
}
fn default_supervisor() -> String {
    DEFAULT_SUPERVISOR.to_string()
}
fn default_language() -> String {
    "es".to_string()
}
fn default_workday_duration() -> String {
    "8h".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_employee: default_employee(),
            default_supervisor: default_supervisor(),
            language: default_language(),
            workday_duration: default_workday_duration(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Strict load: a missing, unreadable or malformed file is an error.
    /// Missing keys take their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Load from `path`, falling back to the built-in example names when the
    /// file is absent or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            config_fallback(path, "not found");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                config_fallback(path, e);
                Self::default()
            }
        }
    }

    /// Resolve the configured language code. Unknown codes are an error,
    /// never silently replaced.
    pub fn language(&self) -> AppResult<Language> {
        self.language.parse()
    }

    pub fn workday_minutes(&self) -> AppResult<i64> {
        parse_duration_minutes(&self.workday_duration).ok_or_else(|| {
            AppError::Config(format!(
                "invalid workday_duration '{}'",
                self.workday_duration
            ))
        })
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Write the default configuration to `path`, creating parent directories.
    /// An existing file is kept unless `force` is set.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
