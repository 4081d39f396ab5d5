//! Widget rendering for the TUI.

use humansize::{DECIMAL, format_size};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph};

use filelens_core::ReadStatus;

use crate::app::{App, StatusLine};
use crate::event::get_key_bindings;

pub(crate) fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let thumb_height = if app.thumbnails.is_empty() {
        0
    } else {
        app.thumbnails.len().min(5) as u16 + 2
    };

    let chunks = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(thumb_height),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);

    render_files(frame, app, chunks[0]);
    if thumb_height > 0 {
        render_thumbnails(frame, app, chunks[1]);
    }
    render_status(frame, app, chunks[2]);
    render_progress(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);

    if app.show_help {
        render_help(frame, area);
    }
}

fn render_files(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let style = if index == app.selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(row.to_string(), style))
        })
        .collect();

    let title = format!(" Files ({}) ", app.files.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn render_thumbnails(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .thumbnails
        .iter()
        .map(|thumbnail| {
            let line = format!(
                "{}  {}",
                thumbnail.name,
                truncate(&thumbnail.data_url, width.saturating_sub(thumbnail.name.len() + 2))
            );
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Thumbnails "),
    );
    frame.render_widget(list, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.status {
        StatusLine::Empty => (String::new(), Style::default()),
        StatusLine::Summary(text) => (text.clone(), Style::default().add_modifier(Modifier::BOLD)),
        StatusLine::Info(text) => (text.clone(), Style::default()),
        StatusLine::Error(text) => (text.clone(), Style::default().fg(Color::Red)),
    };

    let paragraph = Paragraph::new(Line::styled(text, style))
        .block(Block::default().borders(Borders::ALL).title(" Output "));
    frame.render_widget(paragraph, area);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let (percent, label) = match app.session.display_percent() {
        Some(pct) => (u16::from(pct), format!("{pct}%")),
        None => {
            let progress = app.session.progress();
            match (app.session.status(), progress.bytes_total) {
                // All bytes are in but completion has not fired yet;
                // exactly 100 belongs to completion alone
                (ReadStatus::Loading, Some(_)) => {
                    let pct = progress.percent().unwrap_or(0).min(99);
                    (u16::from(pct), format!("{pct}%"))
                }
                // Total length unknown: report bytes, never a percent
                (ReadStatus::Loading, None) => {
                    (0, format_size(progress.bytes_loaded, DECIMAL))
                }
                _ => (0, "0%".to_string()),
            }
        }
    };

    let mut title = Line::from(" Progress ");
    if let Some(name) = &app.reading {
        title = Line::from(format!(" Progress: {name} "));
    }
    if app.loading {
        title.push_span(Span::styled(
            "loading ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = " j/k move  Enter read  1-4 range  t thumbnails  c cancel  ? help  q quit ";
    let paragraph = Paragraph::new(Line::styled(
        hints,
        Style::default().add_modifier(Modifier::DIM),
    ));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);

    let lines: Vec<Line> = get_key_bindings()
        .into_iter()
        .map(|binding| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", binding.keys),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(binding.description),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    format!("{}...", &text[..keep])
}
