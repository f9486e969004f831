use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_minutes;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path: show_path,
        check,
    } = cmd
    {
        if *show_path {
            println!("{}", path.display());
        }

        if *check {
            let language = cfg.language()?;
            let minutes = cfg.workday_minutes()?;
            success(format!(
                "Configuration OK: language {} ({}), workday {}",
                language,
                language.display_name(),
                format_minutes(minutes, false)
            ));
        }

        if *print_config || !(*show_path || *check) {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
