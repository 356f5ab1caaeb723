use crate::error::TrackerError;
use crate::model::entry::SobrietyLog;
use crate::model::stats::StatisticsReport;
use crate::repository::LogRepository;
use crate::service::log_service::LogService;
use crate::service::spending::{spending_totals, SpendPolicy};
use crate::service::statistics::{compute_period_stats, summarize};
use crate::service::streak::compute_streaks;
use crate::usecase::calendar::{build_calendar, CalendarMonth};
use chrono::{Datelike, NaiveDate};

pub struct StatisticsUseCase<'a, R: LogRepository> {
    log_service: &'a LogService<R>,
    policy: SpendPolicy,
}

impl<'a, R: LogRepository> StatisticsUseCase<'a, R> {
    pub fn new(log_service: &'a LogService<R>, policy: SpendPolicy) -> Self {
        Self {
            log_service,
            policy,
        }
    }

    pub fn policy(&self) -> &SpendPolicy {
        &self.policy
    }

    pub fn snapshot(&self) -> SobrietyLog {
        self.log_service.snapshot()
    }

    /// `reference` picks the "current" month for period spending.
    pub fn build_report(&self, reference: NaiveDate) -> StatisticsReport {
        build_report(&self.snapshot(), &self.policy, reference.year(), reference.month())
    }

    pub fn calendar(&self, year: i32, month: u32) -> Result<CalendarMonth, TrackerError> {
        build_calendar(&self.snapshot(), &self.policy, year, month)
    }
}

pub fn build_report(log: &SobrietyLog, policy: &SpendPolicy, year: i32, month: u32) -> StatisticsReport {
    StatisticsReport {
        reference_year: year,
        reference_month: month,
        periods: compute_period_stats(log, policy),
        summary: summarize(log),
        streaks: compute_streaks(log),
        spending: spending_totals(log, policy, year, month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::{LogEntry, RawAmount};
    use crate::model::stats::{LogSummary, StreakStat};
    use anyhow::Result;

    struct MockLogRepo {
        log: SobrietyLog,
    }

    impl LogRepository for MockLogRepo {
        fn load(&self) -> Result<SobrietyLog> { Ok(self.log.clone()) }
        fn upsert(&self, _date: NaiveDate, _entry: LogEntry) -> Result<()> { unimplemented!() }
    }

    fn service_with(entries: Vec<(&str, LogEntry)>) -> LogService<MockLogRepo> {
        let log = entries.into_iter().map(|(k, e)| (k.to_string(), e)).collect();
        LogService::new(MockLogRepo { log })
    }

    fn drinking(amount: f64) -> LogEntry {
        LogEntry::drinking("", "", "", "", amount)
    }

    #[test]
    fn test_report_from_consecutive_days() {
        let service = service_with(vec![
            ("2024-01-01", LogEntry::sober("", "")),
            ("2024-01-02", LogEntry::sober("", "")),
            ("2024-01-03", drinking(0.0)),
        ]);
        let usecase = StatisticsUseCase::new(&service, SpendPolicy::new(40.0));
        let report = usecase.build_report(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());

        assert_eq!(report.streaks, StreakStat { longest_streak: 2, current_streak: 0 });
        assert_eq!(report.summary, LogSummary { total_days: 3, sober_days: 2, drinking_days: 1 });
        assert_eq!(report.spending.overall, 40.0);
        assert_eq!(report.spending.current_period, 40.0);
        assert_eq!(report.periods.monthly["2024-01"].total_days, 3);
    }

    #[test]
    fn test_report_spending_default_substitution() {
        let service = service_with(vec![("2024-01-01", drinking(0.0)), ("2024-01-02", drinking(15.0))]);
        let usecase = StatisticsUseCase::new(&service, SpendPolicy::new(40.0));
        let report = usecase.build_report(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

        assert_eq!(report.spending.overall, 55.0);
        assert_eq!(report.spending.current_period, 0.0);
        assert_eq!((report.reference_year, report.reference_month), (2025, 3));
    }

    #[test]
    fn test_report_empty_log() {
        let service = service_with(vec![]);
        let usecase = StatisticsUseCase::new(&service, SpendPolicy::default());
        let report = usecase.build_report(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert_eq!(report.summary.total_days, 0);
        assert_eq!(report.summary.percent_sober(), 0.0);
        assert_eq!(report.streaks, StreakStat::default());
        assert!(report.periods.monthly.is_empty());
        assert!(report.periods.yearly.is_empty());
        assert_eq!(report.spending.overall, 0.0);
    }

    #[test]
    fn test_report_ignores_malformed_dates() {
        let service = service_with(vec![
            ("not-a-date", LogEntry { amount_spent: RawAmount::Missing, ..LogEntry::default() }),
            ("2024-05-05", LogEntry::sober("", "")),
        ]);
        let usecase = StatisticsUseCase::new(&service, SpendPolicy::default());
        let report = usecase.build_report(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());

        assert_eq!(report.summary.total_days, 1);
        assert_eq!(report.spending.overall, 0.0);
        assert_eq!(report.streaks, StreakStat { longest_streak: 1, current_streak: 1 });
    }

    #[test]
    fn test_calendar_through_usecase() {
        let service = service_with(vec![("2024-05-05", LogEntry::sober("", ""))]);
        let usecase = StatisticsUseCase::new(&service, SpendPolicy::default());

        let calendar = usecase.calendar(2024, 5).unwrap();
        assert_eq!(calendar.stat.sober_days, 1);
        assert!(usecase.calendar(2024, 13).is_err());
    }
}
