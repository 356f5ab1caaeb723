use chrono::NaiveDate;

use crate::model::entry::SobrietyLog;
use crate::model::stats::StreakStat;

pub fn compute_streaks(log: &SobrietyLog) -> StreakStat {
    let days: Vec<(NaiveDate, bool)> = log
        .dated_entries()
        .into_iter()
        .map(|(date, entry)| (date, entry.sober))
        .collect();

    StreakStat {
        longest_streak: longest_streak(&days),
        current_streak: trailing_streak(&days),
    }
}

/// Longest run of sober days on consecutive calendar dates.
/// `days` must be sorted ascending. A missing day breaks the run.
pub fn longest_streak(days: &[(NaiveDate, bool)]) -> u32 {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for &(date, sober) in days {
        current = if !sober {
            0
        } else if previous.is_some_and(|prev| (date - prev).num_days() == 1) {
            current + 1
        } else {
            1
        };
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}

/// Sober entries at the end of the log, ignoring gaps between them and
/// regardless of how old the newest entry is.
pub fn trailing_streak(days: &[(NaiveDate, bool)]) -> u32 {
    days.iter().rev().take_while(|(_, sober)| *sober).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::LogEntry;

    fn log_of(entries: &[(&str, bool)]) -> SobrietyLog {
        entries
            .iter()
            .map(|(key, sober)| {
                let entry = if *sober {
                    LogEntry::sober("", "")
                } else {
                    LogEntry::drinking("", "", "", "", 0.0)
                };
                (key.to_string(), entry)
            })
            .collect()
    }

    #[test]
    fn test_drinking_day_ends_streak() {
        let log = log_of(&[("2024-01-01", true), ("2024-01-02", true), ("2024-01-03", false)]);
        assert_eq!(compute_streaks(&log), StreakStat { longest_streak: 2, current_streak: 0 });
    }

    #[test]
    fn test_gap_breaks_longest_but_not_trailing() {
        let log = log_of(&[("2024-02-10", true), ("2024-02-12", true)]);
        assert_eq!(compute_streaks(&log), StreakStat { longest_streak: 1, current_streak: 2 });
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(compute_streaks(&SobrietyLog::new()), StreakStat::default());
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let log = log_of(&[("2024-01-03", true), ("2024-01-01", true), ("2024-01-02", true)]);
        assert_eq!(compute_streaks(&log), StreakStat { longest_streak: 3, current_streak: 3 });
    }

    #[test]
    fn test_longest_across_year_boundary() {
        let log = log_of(&[
            ("2023-12-30", true),
            ("2023-12-31", true),
            ("2024-01-01", true),
            ("2024-01-02", false),
            ("2024-01-03", true),
        ]);
        assert_eq!(compute_streaks(&log), StreakStat { longest_streak: 3, current_streak: 1 });
    }

    #[test]
    fn test_malformed_keys_do_not_join_runs() {
        let log = log_of(&[("2024-01-01", true), ("2024-01-02", true), ("zzz", false)]);
        assert_eq!(compute_streaks(&log), StreakStat { longest_streak: 2, current_streak: 2 });
    }

    #[test]
    fn test_restart_after_drinking() {
        let log = log_of(&[
            ("2024-03-01", true),
            ("2024-03-02", false),
            ("2024-03-03", true),
            ("2024-03-04", true),
        ]);
        assert_eq!(compute_streaks(&log), StreakStat { longest_streak: 2, current_streak: 2 });
    }
}
