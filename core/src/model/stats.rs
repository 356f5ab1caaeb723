use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `sober / total * 100`, or 0 for an empty bucket.
pub fn percent_sober(sober_days: u32, total_days: u32) -> f64 {
    if total_days == 0 {
        0.0
    } else {
        sober_days as f64 / total_days as f64 * 100.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyStat {
    pub sober_days: u32,
    pub total_days: u32,
    pub spent: f64,
}

impl MonthlyStat {
    pub fn percent_sober(&self) -> f64 {
        percent_sober(self.sober_days, self.total_days)
    }

    pub fn drinking_days(&self) -> u32 {
        self.total_days - self.sober_days
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearlyStat {
    pub sober_days: u32,
    pub total_days: u32,
}

impl YearlyStat {
    pub fn percent_sober(&self) -> f64 {
        percent_sober(self.sober_days, self.total_days)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakStat {
    pub longest_streak: u32,
    pub current_streak: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct SpendingTotals {
    pub overall: f64,
    pub current_period: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSummary {
    pub total_days: u32,
    pub sober_days: u32,
    pub drinking_days: u32,
}

impl LogSummary {
    pub fn percent_sober(&self) -> f64 {
        percent_sober(self.sober_days, self.total_days)
    }
}

/// Month buckets keyed `YYYY-MM`, year buckets keyed `YYYY`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PeriodStats {
    pub monthly: BTreeMap<String, MonthlyStat>,
    pub yearly: BTreeMap<String, YearlyStat>,
}

/// Everything the presenters need, computed from one snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub reference_year: i32,
    pub reference_month: u32,
    pub periods: PeriodStats,
    pub summary: LogSummary,
    pub streaks: StreakStat,
    pub spending: SpendingTotals,
}
