use crate::cli::commands::build_from_args;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{row_to_cells, sheet_headers};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { period } = cmd {
        let sheet = build_from_args(period, cfg)?;
        let labels = sheet.labels();

        header(labels.title);
        println!("{} {}", labels.name, sheet.employee);
        println!("{} {}", labels.month_year, sheet.period_label);
        println!();

        let mut table = Table::with_headers(&sheet_headers(labels));
        for row in &sheet.rows {
            table.add_row(row_to_cells(row));
        }
        if sheet.total_minutes() > 0 {
            let mut total = vec![labels.total.to_string(), String::new(), String::new(), String::new()];
            total.push(format_minutes(sheet.total_minutes(), false));
            table.add_row(total);
        }
        print!("{}", table.render());

        println!();
        info(format!(
            "{}: {} | {}: {}",
            labels.employee, sheet.employee, labels.supervisor, sheet.supervisor
        ));
        info(format!("{} day(s)", sheet.len()));
    }
    Ok(())
}
