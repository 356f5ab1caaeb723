pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{Config, DEFAULT_AMOUNT};
pub use error::TrackerError;
pub use model::entry::{LogEntry, LogFile, RawAmount, SobrietyLog};
pub use model::stats::{LogSummary, MonthlyStat, PeriodStats, SpendingTotals, StatisticsReport, StreakStat, YearlyStat};
pub use repository::{FileLogRepository, LogRepository};
pub use service::log_service::LogService;
pub use service::spending::{Spend, SpendPolicy};
pub use time::{format_month_key, month_name, parse_entry_date, parse_log_date};
pub use usecase::calendar::{CalendarDay, CalendarMonth, DayStatus};
pub use usecase::report::{build_report, StatisticsUseCase};
