use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, Padding, Paragraph, Row, Table},
    Frame,
};
use soberlog_core::DayStatus;

use crate::tui::app::DashboardApp;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    sober: Color,
    drinking: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    sober: Color::Green,
    drinking: Color::Red,
};

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Calendar + sidebar
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, main_layout[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(main_layout[1]);

    draw_calendar(frame, app, content_chunks[0]);
    draw_info_panel(frame, app, content_chunks[2]);

    let help = Line::from(vec![
        Span::styled("MONTH: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[2]);
}

fn draw_header(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(1), Constraint::Length(30)])
        .split(area);

    let app_title = Paragraph::new(Span::styled(
        "SOBERLOG",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let nav_text = Line::from(vec![
        Span::styled(" < ", Style::default().fg(THEME.text)),
        Span::styled(format!(" {} ", app.title()), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(THEME.text)),
    ]);
    let nav = Paragraph::new(nav_text)
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));
    frame.render_widget(header_block, area);
}

fn draw_calendar(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let rows: Vec<Row> = app
        .calendar
        .weeks
        .iter()
        .map(|week| {
            Row::new(week.iter().map(|cell| match cell {
                None => Cell::from(""),
                Some(day) => {
                    let style = match day.status {
                        DayStatus::Sober => Style::default().bg(THEME.sober).fg(Color::Black),
                        DayStatus::Drinking => Style::default().bg(THEME.drinking).fg(Color::Black),
                        DayStatus::Unlogged => Style::default().fg(THEME.text),
                    };
                    Cell::from(Span::styled(format!("{:>3}", day.day), style))
                }
            }))
            .height(2)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(4); 7])
        .header(
            Row::new(vec![" Mo", " Tu", " We", " Th", " Fr", " Sa", " Su"])
                .style(Style::default().fg(Color::Yellow)),
        )
        .column_spacing(1)
        .block(
            Block::default()
                .title(" Calendar ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        );
    frame.render_widget(table, area);
}

fn draw_info_panel(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Month
            Constraint::Length(3), // Gauge
            Constraint::Min(8),    // Overall
        ])
        .split(area);

    let stat = &app.calendar.stat;
    let month_text = vec![
        stat_line("Logged:   ", format!("{} days", stat.total_days), THEME.text),
        stat_line("Sober:    ", format!("{} days", stat.sober_days), THEME.sober),
        stat_line("Drinking: ", format!("{} days", stat.drinking_days()), THEME.drinking),
        stat_line("Spent:    ", app.format_money(stat.spent), THEME.text),
    ];
    frame.render_widget(Paragraph::new(month_text).block(card(" This Month ")), chunks[0]);

    let percent = stat.percent_sober();
    let gauge = Gauge::default()
        .block(card(" Sober Days "))
        .gauge_style(Style::default().fg(if percent >= 50.0 { THEME.sober } else { THEME.drinking }))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.2}%", percent));
    frame.render_widget(gauge, chunks[1]);

    let report = &app.report;
    let overall_text = vec![
        stat_line("Total days:     ", report.summary.total_days.to_string(), THEME.text),
        stat_line("Sober overall:  ", format!("{:.2}%", report.summary.percent_sober()), THEME.sober),
        stat_line("Longest streak: ", format!("{} days", report.streaks.longest_streak), THEME.primary),
        stat_line("Current streak: ", format!("{} days", report.streaks.current_streak), THEME.primary),
        stat_line("Spent overall:  ", app.format_money(report.spending.overall), THEME.drinking),
    ];
    frame.render_widget(Paragraph::new(overall_text).block(card(" Overall ")), chunks[2]);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(THEME.muted)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title)
}
