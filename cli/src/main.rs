mod calendar;
mod export;
mod stats;
mod tui;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use soberlog_core::{
    parse_entry_date, Config, FileLogRepository, LogEntry, LogService, SpendPolicy, StatisticsUseCase,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "soberlog")]
#[command(about = "Track sober days, streaks and spending", long_about = None)]
struct Cli {
    /// Directory holding sober_data.json (default: ~/.soberlog)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <data dir>/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add or overwrite the entry for a day (usage: log drinking --spent 12 --alcohol-type beer)
    Log {
        /// How the day went
        #[arg(value_enum)]
        status: DayKind,
        /// YYYY-MM-DD, "today" or "yesterday"; blank means today
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        mood: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// Type of alcohol (drinking days only)
        #[arg(long, default_value = "")]
        alcohol_type: String,
        /// Amount consumed (drinking days only)
        #[arg(long, default_value = "")]
        amount: String,
        /// Amount spent (drinking days only)
        #[arg(long)]
        spent: Option<String>,
    },
    /// Show monthly, yearly, streak and spending statistics
    Stats,
    /// Show a colored calendar for a month (default: current month)
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Export the log and a summary to a CSV report
    Export {
        /// Output file (default: "report <Month> <Year>.csv")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Open the terminal dashboard
    Tui,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum DayKind {
    Sober,
    Drinking,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = match (&cli.config, &cli.data_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join("config.toml"),
        (None, None) => Config::default_path()?,
    };
    let mut config = Config::load(&config_path)?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    Ok(config)
}

/// Unparsable input is stored as 0 and later counted at the default amount.
fn parse_spent(input: Option<&str>) -> f64 {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0.0;
    };
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(input = raw, "could not parse amount spent, storing 0");
            0.0
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let repo = FileLogRepository::new(&config.data_dir()?)?;
    let service = LogService::new(repo);
    let usecase = StatisticsUseCase::new(&service, SpendPolicy::new(config.default_amount));
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Log { status, date, mood, notes, alcohol_type, amount, spent }) => {
            let date = parse_entry_date(&date, today)?;
            let entry = match status {
                DayKind::Sober => LogEntry::sober(mood, notes),
                DayKind::Drinking => {
                    LogEntry::drinking(mood, notes, alcohol_type, amount, parse_spent(spent.as_deref()))
                }
            };
            let label = entry.status_label();
            service.log_entry(date, entry)?;
            println!("Logged {} for {}", label, date.format("%Y-%m-%d"));
        },
        Some(Commands::Stats) => {
            let report = usecase.build_report(today);
            print!("{}", stats::render_statistics(&report, &config)?);
        },
        Some(Commands::Calendar { year, month }) => {
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());
            let calendar = usecase.calendar(year, month)?;
            print!("{}", calendar::render_calendar(&calendar, &config)?);
        },
        Some(Commands::Export { output }) => {
            let path = output.unwrap_or_else(|| PathBuf::from(export::default_filename(today)));
            let file = File::create(&path)
                .with_context(|| format!("Failed to create report file: {}", path.display()))?;
            let log = usecase.snapshot();
            export::write_report(&log, usecase.policy(), &config, today, file)?;
            tracing::info!(path = %path.display(), "report written");
            println!("Report saved to file: {}", path.display());
        },
        Some(Commands::Tui) | None => {
            tui::run(&usecase, &config, today)?;
        }
    }
    Ok(())
}
