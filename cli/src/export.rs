use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use soberlog_core::{build_report, month_name, Config, SobrietyLog, SpendPolicy};

const LOG_HEADER: &[&str] = &[
    "Date",
    "Status",
    "Mood",
    "Type of Alcohol",
    "Amount Consumed",
    "Notes",
    "Amount Spent",
];

pub fn default_filename(today: NaiveDate) -> String {
    format!("report {} {}.csv", month_name(today.month()), today.year())
}

/// Log rows sorted by date key, a blank row, then the summary block.
///
/// The summary comes from the same snapshot as the rows; `today` picks the
/// reporting month.
pub fn write_report(
    log: &SobrietyLog,
    policy: &SpendPolicy,
    config: &Config,
    today: NaiveDate,
    writer: impl Write,
) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(LOG_HEADER).context("CSV write error")?;

    for (key, entry) in log.iter() {
        let spent = policy
            .effective_spend(entry)
            .map(|amount| config.format_money(amount))
            .unwrap_or_default();
        csv.write_record([
            key,
            entry.status_label(),
            entry.mood.as_str(),
            entry.alcohol_type.as_str(),
            entry.alcohol_amount.as_str(),
            entry.notes.as_str(),
            spent.as_str(),
        ])
        .context("CSV write error")?;
    }

    let report = build_report(log, policy, today.year(), today.month());
    let summary = &report.summary;
    let summary_rows = [
        ("Total days in log:", summary.total_days.to_string()),
        ("Sober days:", summary.sober_days.to_string()),
        ("Drinking days:", summary.drinking_days.to_string()),
        ("Percentage sober:", format!("{:.2}%", summary.percent_sober())),
        ("Longest sober streak:", format!("{} days", report.streaks.longest_streak)),
        ("Current sober streak:", format!("{} days", report.streaks.current_streak)),
        ("Total amount spent (overall):", config.format_money(report.spending.overall)),
        (
            "Amount spent this month:",
            config.format_money(report.spending.current_period),
        ),
    ];

    csv.write_record([""]).context("CSV write error")?;
    csv.write_record(["Summary"]).context("CSV write error")?;
    for (label, value) in &summary_rows {
        csv.write_record([*label, value.as_str()]).context("CSV write error")?;
    }

    csv.flush().context("CSV flush error")?;
    Ok(())
}
