use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if Config::init(path, force)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }
    Ok(())
}
