use std::fmt::{self, Write};

use crossterm::style::Stylize;
use soberlog_core::{CalendarMonth, Config, DayStatus};

const WEEK_HEADER: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Monday-first grid; sober days on green, drinking days on red.
pub fn render_calendar(calendar: &CalendarMonth, config: &Config) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let title = format!("\nCalendar for {}/{}", calendar.month, calendar.year);
    writeln!(out, "{}", title.cyan())?;
    let header: Vec<String> = WEEK_HEADER.iter().map(|d| format!("{:>3}", d)).collect();
    writeln!(out, "{}", header.join(" "))?;

    for week in &calendar.weeks {
        let mut line = String::new();
        for cell in week {
            match cell {
                None => line.push_str("    "),
                Some(day) => {
                    let label = format!("{:3}", day.day);
                    let styled = match day.status {
                        DayStatus::Sober => label.on_green().to_string(),
                        DayStatus::Drinking => label.on_red().to_string(),
                        DayStatus::Unlogged => label,
                    };
                    line.push_str(&styled);
                    line.push(' ');
                }
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    let stat = &calendar.stat;
    if stat.total_days > 0 {
        writeln!(out, "{}", format!("\nStatistics for {}/{}:", calendar.month, calendar.year).cyan())?;
        writeln!(
            out,
            "{}",
            format!(
                "{} sober days out of {} days ({:.2}%), spent: {}",
                stat.sober_days,
                stat.total_days,
                stat.percent_sober(),
                config.format_money(stat.spent)
            )
            .yellow()
        )?;
    } else {
        writeln!(out, "{}", "\nNo data available for the selected month.".yellow())?;
    }

    Ok(out)
}
