use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use soberlog_core::time::shift_month;
use soberlog_core::usecase::calendar::build_calendar;
use soberlog_core::{build_report, CalendarMonth, Config, SobrietyLog, SpendPolicy, StatisticsReport};

/// Dashboard state: one snapshot, browsed month by month.
pub struct DashboardApp {
    log: SobrietyLog,
    policy: SpendPolicy,
    config: Config,
    pub report: StatisticsReport,
    pub calendar: CalendarMonth,
}

impl DashboardApp {
    pub fn new(log: SobrietyLog, policy: SpendPolicy, config: &Config, today: NaiveDate) -> Result<Self> {
        let report = build_report(&log, &policy, today.year(), today.month());
        let calendar = build_calendar(&log, &policy, today.year(), today.month())?;
        Ok(Self {
            log,
            policy,
            config: config.clone(),
            report,
            calendar,
        })
    }

    pub fn next_month(&mut self) {
        self.shift(1);
    }

    pub fn previous_month(&mut self) {
        self.shift(-1);
    }

    fn shift(&mut self, delta: i32) {
        let (year, month) = shift_month(self.calendar.year, self.calendar.month, delta);
        match build_calendar(&self.log, &self.policy, year, month) {
            Ok(calendar) => self.calendar = calendar,
            Err(err) => tracing::warn!(error = %err, "cannot move calendar"),
        }
    }

    pub fn format_money(&self, amount: f64) -> String {
        self.config.format_money(amount)
    }

    pub fn title(&self) -> String {
        format!("{} {}", soberlog_core::month_name(self.calendar.month), self.calendar.year)
    }
}
