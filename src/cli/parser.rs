use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate localized monthly attendance timesheets (weekdays only)",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Period and people shared by `show` and `generate`.
#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    /// Month number (1-12), defaults to the current month
    #[arg(long, short = 'm')]
    pub month: Option<u32>,

    /// Year, defaults to the current year
    #[arg(long, short = 'y')]
    pub year: Option<i32>,

    /// First day of the month to include
    #[arg(long = "start-day", short = 's', default_value_t = 1)]
    pub start_day: u32,

    /// Language code: es, pt, en (defaults to the configured language)
    #[arg(long = "lang", short = 'l')]
    pub lang: Option<String>,

    /// Employee name (defaults to the configured name)
    #[arg(long)]
    pub employee: Option<String>,

    /// Supervisor name (defaults to the configured name)
    #[arg(long)]
    pub supervisor: Option<String>,

    /// Pre-fill every day with a fixed schedule, e.g. 09:00-17:30; the balance
    /// is computed against the configured workday_duration
    #[arg(long, value_name = "IN-OUT")]
    pub fill: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the resolved configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(long = "check", help = "Validate language code and workday duration")]
        check: bool,
    },

    /// Print the timesheet rows for a period
    Show {
        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Generate a timesheet document
    Generate {
        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long, value_enum, help = "Output format (default: from --file extension, else pdf)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Output file (default: timesheet_<name>_<month>_<year>.<ext>)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
