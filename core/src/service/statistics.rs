use crate::model::entry::SobrietyLog;
use crate::model::stats::{LogSummary, MonthlyStat, PeriodStats};
use crate::service::spending::SpendPolicy;
use crate::time::{month_key, same_month, year_key};

// Standalone functions for pure logic

/// Month and year buckets. Buckets only exist for periods with entries.
pub fn compute_period_stats(log: &SobrietyLog, policy: &SpendPolicy) -> PeriodStats {
    let mut stats = PeriodStats::default();

    for (date, entry) in log.dated_entries() {
        let month = stats.monthly.entry(month_key(date)).or_default();
        month.total_days += 1;
        match policy.effective_spend(entry) {
            None => month.sober_days += 1,
            Some(spent) => month.spent += spent,
        }

        let year = stats.yearly.entry(year_key(date)).or_default();
        year.total_days += 1;
        if entry.sober {
            year.sober_days += 1;
        }
    }

    stats
}

/// Stats for one explicit `(year, month)`; an unlogged month is all zeros.
pub fn month_stat(log: &SobrietyLog, policy: &SpendPolicy, year: i32, month: u32) -> MonthlyStat {
    let mut stat = MonthlyStat::default();

    for (date, entry) in log.dated_entries() {
        if !same_month(date, year, month) {
            continue;
        }
        stat.total_days += 1;
        match policy.effective_spend(entry) {
            None => stat.sober_days += 1,
            Some(spent) => stat.spent += spent,
        }
    }

    stat
}

pub fn summarize(log: &SobrietyLog) -> LogSummary {
    let dated = log.dated_entries();
    let total_days = dated.len() as u32;
    let sober_days = dated.iter().filter(|(_, entry)| entry.sober).count() as u32;

    LogSummary {
        total_days,
        sober_days,
        drinking_days: total_days - sober_days,
    }
}
