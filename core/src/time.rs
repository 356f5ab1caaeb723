use chrono::{Datelike, Duration, NaiveDate};

use crate::error::TrackerError;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Parses a log key. `None` means the entry is skipped by aggregation.
pub fn parse_log_date(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn year_key(date: NaiveDate) -> String {
    date.format("%Y").to_string()
}

/// Resolves the date typed by the user when logging an entry.
pub fn parse_entry_date(input: &str, today: NaiveDate) -> Result<NaiveDate, TrackerError> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" | "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    NaiveDate::parse_from_str(input, DATE_KEY_FORMAT).map_err(|source| TrackerError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Display label for a month number; numbers outside 1..=12 come back as digits.
pub fn month_name(month: u32) -> String {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize].to_string(),
        _ => format!("{:02}", month),
    }
}

/// `"2024-03"` becomes `"March 2024"`. Unrecognised keys pass through.
pub fn format_month_key(key: &str) -> String {
    match key.split_once('-') {
        Some((year, month)) => match month.parse::<u32>() {
            Ok(m @ 1..=12) => format!("{} {}", month_name(m), year),
            _ => key.to_string(),
        },
        None => key.to_string(),
    }
}

pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, TrackerError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(TrackerError::InvalidMonth { year, month })
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32, TrackerError> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok((next - first).num_days() as u32)
}

/// The month before/after `(year, month)`, wrapping across years.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

pub fn same_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}
