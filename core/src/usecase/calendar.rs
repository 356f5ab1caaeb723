use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::model::entry::SobrietyLog;
use crate::model::stats::MonthlyStat;
use crate::service::spending::SpendPolicy;
use crate::service::statistics::month_stat;
use crate::time::{days_in_month, first_of_month};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Sober,
    Drinking,
    Unlogged,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub status: DayStatus,
}

/// One month laid out Monday-first, with the month's stats.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
    pub stat: MonthlyStat,
}

impl CalendarMonth {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }
}

pub fn build_calendar(
    log: &SobrietyLog,
    policy: &SpendPolicy,
    year: i32,
    month: u32,
) -> Result<CalendarMonth, TrackerError> {
    let first = first_of_month(year, month)?;
    let day_count = days_in_month(year, month)?;

    let mut weeks = Vec::new();
    let mut week: [Option<CalendarDay>; 7] = [None; 7];
    let mut column = first.weekday().num_days_from_monday() as usize;

    for day in 1..=day_count {
        // Calendar cells look up the exact key, like the raw log does.
        let key = format!("{:04}-{:02}-{:02}", year, month, day);
        let status = match log.get(&key) {
            Some(entry) if entry.sober => DayStatus::Sober,
            Some(_) => DayStatus::Drinking,
            None => DayStatus::Unlogged,
        };
        week[column] = Some(CalendarDay { day, status });
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }

    Ok(CalendarMonth {
        year,
        month,
        weeks,
        stat: month_stat(log, policy, year, month),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::LogEntry;

    #[test]
    fn test_layout_monday_first() {
        // 2024-02-01 is a Thursday; February 2024 has 29 days.
        let calendar = build_calendar(&SobrietyLog::new(), &SpendPolicy::default(), 2024, 2).unwrap();

        assert_eq!(calendar.weeks.len(), 5);
        assert!(calendar.weeks[0][..3].iter().all(Option::is_none));
        assert_eq!(calendar.weeks[0][3].map(|d| d.day), Some(1));
        assert_eq!(calendar.weeks[4][3].map(|d| d.day), Some(29));
        assert_eq!(calendar.weeks[4][4], None);
        assert_eq!(calendar.days().count(), 29);
    }

    #[test]
    fn test_day_status_and_stats() {
        let mut log = SobrietyLog::new();
        log.insert_raw("2024-07-01", LogEntry::sober("", ""));
        log.insert_raw("2024-07-02", LogEntry::drinking("", "", "gin", "2", 0.0));
        log.insert_raw("2024-08-01", LogEntry::drinking("", "", "", "", 5.0));

        let calendar = build_calendar(&log, &SpendPolicy::new(40.0), 2024, 7).unwrap();
        let statuses: Vec<DayStatus> = calendar.days().take(3).map(|d| d.status).collect();

        assert_eq!(statuses, vec![DayStatus::Sober, DayStatus::Drinking, DayStatus::Unlogged]);
        assert_eq!(calendar.stat, MonthlyStat { sober_days: 1, total_days: 2, spent: 40.0 });
    }

    #[test]
    fn test_invalid_month() {
        let err = build_calendar(&SobrietyLog::new(), &SpendPolicy::default(), 2024, 0).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidMonth { month: 0, .. }));
    }
}
