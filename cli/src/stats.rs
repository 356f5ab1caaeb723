use std::fmt::{self, Write};

use crossterm::style::Stylize;
use soberlog_core::{format_month_key, month_name, Config, StatisticsReport};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Sober / Total")]
    days: String,
    #[tabled(rename = "Sober %")]
    percent: String,
    #[tabled(rename = "Spent")]
    spent: String,
}

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Sober / Total")]
    days: String,
    #[tabled(rename = "Sober %")]
    percent: String,
}

fn styled_table<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

/// Full statistics screen as printed by `soberlog stats`.
pub fn render_statistics(report: &StatisticsReport, config: &Config) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", "\n========= ALL STATISTICS =========".blue())?;

    writeln!(out, "{}", "\n=== Monthly Statistics ===".green())?;
    if report.periods.monthly.is_empty() {
        writeln!(out, "No entries logged yet.")?;
    } else {
        let rows: Vec<MonthRow> = report
            .periods
            .monthly
            .iter()
            .map(|(key, stat)| MonthRow {
                month: format_month_key(key),
                days: format!("{} / {}", stat.sober_days, stat.total_days),
                percent: format!("{:.2}%", stat.percent_sober()),
                spent: config.format_money(stat.spent),
            })
            .collect();
        writeln!(out, "{}", styled_table(rows))?;
    }

    writeln!(out, "{}", "\n=== Yearly Statistics ===".cyan())?;
    if !report.periods.yearly.is_empty() {
        let rows: Vec<YearRow> = report
            .periods
            .yearly
            .iter()
            .map(|(key, stat)| YearRow {
                year: key.clone(),
                days: format!("{} / {}", stat.sober_days, stat.total_days),
                percent: format!("{:.2}%", stat.percent_sober()),
            })
            .collect();
        writeln!(out, "{}", styled_table(rows))?;
    }

    let summary = &report.summary;
    let streaks = &report.streaks;
    writeln!(out, "{}", "\n=== Additional Statistics ===".magenta())?;
    writeln!(out, "Total days in log: {}", summary.total_days)?;
    writeln!(out, "Percentage sober: {:.2}%", summary.percent_sober())?;
    writeln!(out, "Longest sober streak: {} days", streaks.longest_streak)?;
    writeln!(out, "Current sober streak: {} days", streaks.current_streak)?;

    writeln!(out, "{}", "\n=== Alcohol Spending ===".yellow())?;
    writeln!(out, "Total amount spent on alcohol (overall): {}", config.format_money(report.spending.overall))?;
    writeln!(
        out,
        "Total amount spent on alcohol ({} {}): {}",
        month_name(report.reference_month),
        report.reference_year,
        config.format_money(report.spending.current_period)
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soberlog_core::{build_report, LogEntry, SobrietyLog, SpendPolicy};

    #[test]
    fn test_render_statistics() {
        let mut log = SobrietyLog::new();
        log.insert_raw("2024-01-01", LogEntry::sober("", ""));
        log.insert_raw("2024-01-02", LogEntry::sober("", ""));
        log.insert_raw("2024-01-03", LogEntry::drinking("", "", "beer", "2", 0.0));

        let report = build_report(&log, &SpendPolicy::new(40.0), 2024, 1);
        let out = render_statistics(&report, &Config::default()).unwrap();

        assert!(out.contains("January 2024"));
        assert!(out.contains("2 / 3"));
        assert!(out.contains("66.67%"));
        assert!(out.contains("Longest sober streak: 2 days"));
        assert!(out.contains("Current sober streak: 0 days"));
        assert!(out.contains("(overall): 40.00 $"));
        assert!(out.contains("(January 2024): 40.00 $"));
    }

    #[test]
    fn test_render_empty_log() {
        let report = build_report(&SobrietyLog::new(), &SpendPolicy::default(), 2024, 1);
        let out = render_statistics(&report, &Config::default()).unwrap();

        assert!(out.contains("No entries logged yet."));
        assert!(out.contains("Total days in log: 0"));
        assert!(out.contains("Percentage sober: 0.00%"));
    }
}
