use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_AMOUNT;
use crate::model::entry::{LogEntry, RawAmount, SobrietyLog};
use crate::model::stats::SpendingTotals;
use crate::time::same_month;

/// Outcome of reading a drinking day's spend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spend {
    /// A positive amount was recorded.
    Recorded(f64),
    /// Nothing usable was recorded (absent, unparsable, negative or zero).
    Defaulted,
}

/// Default-substitution policy for drinking-day spend.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpendPolicy {
    pub default_amount: f64,
}

impl Default for SpendPolicy {
    fn default() -> Self {
        Self { default_amount: DEFAULT_AMOUNT }
    }
}

impl SpendPolicy {
    pub fn new(default_amount: f64) -> Self {
        Self { default_amount }
    }

    pub fn resolve(&self, raw: &RawAmount) -> Spend {
        let parsed = match raw {
            RawAmount::Number(value) => Some(*value),
            RawAmount::Text(text) => text.trim().parse::<f64>().ok(),
            RawAmount::Missing | RawAmount::Other(_) => None,
        };

        match parsed {
            Some(value) if value.is_finite() && value > 0.0 => Spend::Recorded(value),
            _ => Spend::Defaulted,
        }
    }

    pub fn amount(&self, raw: &RawAmount) -> f64 {
        match self.resolve(raw) {
            Spend::Recorded(value) => value,
            Spend::Defaulted => self.default_amount,
        }
    }

    /// Effective spend of an entry; sober days cost nothing.
    pub fn effective_spend(&self, entry: &LogEntry) -> Option<f64> {
        if entry.sober {
            None
        } else {
            Some(self.amount(&entry.amount_spent))
        }
    }
}

/// Overall spend plus the spend inside the `(year, month)` reference period.
pub fn spending_totals(log: &SobrietyLog, policy: &SpendPolicy, year: i32, month: u32) -> SpendingTotals {
    let mut totals = SpendingTotals::default();

    for (date, entry) in log.dated_entries() {
        if let Some(spent) = policy.effective_spend(entry) {
            totals.overall += spent;
            if same_month(date, year, month) {
                totals.current_period += spent;
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drinking(amount: RawAmount) -> LogEntry {
        LogEntry { amount_spent: amount, ..LogEntry::default() }
    }

    #[test]
    fn test_resolve_recorded() {
        let policy = SpendPolicy::new(40.0);
        assert_eq!(policy.resolve(&RawAmount::Number(15.0)), Spend::Recorded(15.0));
        assert_eq!(policy.resolve(&RawAmount::Text(" 9.5 ".to_string())), Spend::Recorded(9.5));
    }

    #[test]
    fn test_resolve_defaulted() {
        let policy = SpendPolicy::new(40.0);
        assert_eq!(policy.resolve(&RawAmount::Number(0.0)), Spend::Defaulted);
        assert_eq!(policy.resolve(&RawAmount::Number(-0.0)), Spend::Defaulted);
        assert_eq!(policy.resolve(&RawAmount::Number(-3.0)), Spend::Defaulted);
        assert_eq!(policy.resolve(&RawAmount::Text("a lot".to_string())), Spend::Defaulted);
        assert_eq!(policy.resolve(&RawAmount::Text("0".to_string())), Spend::Defaulted);
        assert_eq!(policy.resolve(&RawAmount::Text("NaN".to_string())), Spend::Defaulted);
        assert_eq!(policy.resolve(&RawAmount::Missing), Spend::Defaulted);
        assert_eq!(policy.resolve(&RawAmount::Other(serde_json::json!({ "eur": 12 }))), Spend::Defaulted);
        assert_eq!(policy.resolve(&RawAmount::Other(serde_json::Value::Bool(true))), Spend::Defaulted);
    }

    #[test]
    fn test_effective_spend() {
        let policy = SpendPolicy::new(40.0);
        assert_eq!(policy.effective_spend(&drinking(RawAmount::Number(0.0))), Some(40.0));
        assert_eq!(policy.effective_spend(&drinking(RawAmount::Number(12.0))), Some(12.0));
        assert_eq!(policy.effective_spend(&LogEntry::sober("", "")), None);
    }

    #[test]
    fn test_overall_spend_substitutes_zero() {
        let mut log = SobrietyLog::new();
        log.insert_raw("2024-01-01", drinking(RawAmount::Number(0.0)));
        log.insert_raw("2024-01-02", drinking(RawAmount::Number(15.0)));

        let totals = spending_totals(&log, &SpendPolicy::new(40.0), 2024, 1);
        assert_eq!(totals.overall, 55.0);
        assert_eq!(totals.current_period, 55.0);
    }

    #[test]
    fn test_current_period_restricted_to_month() {
        let mut log = SobrietyLog::new();
        log.insert_raw("2024-01-31", drinking(RawAmount::Number(10.0)));
        log.insert_raw("2024-02-01", drinking(RawAmount::Number(20.0)));
        log.insert_raw("2023-02-01", drinking(RawAmount::Number(5.0)));
        log.insert_raw("2024-02-02", LogEntry::sober("", ""));
        log.insert_raw("garbage", drinking(RawAmount::Number(100.0)));

        let totals = spending_totals(&log, &SpendPolicy::default(), 2024, 2);
        assert_eq!(totals.overall, 35.0);
        assert_eq!(totals.current_period, 20.0);
    }
}
