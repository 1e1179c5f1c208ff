//! Stateless rendering of the side panel, map and end-of-game overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::game::{PanelView, Prompt, Summary};

use super::app::App;

/// Render the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let panel = app.panel();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(20)])
        .split(frame.area());

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(8),    // Question
            Constraint::Min(6),    // Log / candidates
            Constraint::Length(3), // Keys
        ])
        .split(columns[0]);

    draw_status(frame, sidebar[0], &panel);
    draw_question(frame, sidebar[1], &panel, app.cursor(), app.notice());
    draw_log(frame, sidebar[2], &panel);
    draw_keys(frame, sidebar[3]);

    frame.render_widget(app.map(), columns[1]);

    if let Some(summary) = &panel.summary {
        draw_summary(frame, columns[1], summary);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, panel: &PanelView) {
    let mut spans = vec![
        Span::styled("CITY HUNT", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {} remaining", panel.remaining)),
    ];
    if let Some(progress) = panel.progress() {
        spans.push(Span::styled(format!("  {progress}"), Style::default().fg(Color::DarkGray)));
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_question(frame: &mut Frame, area: Rect, panel: &PanelView, cursor: usize, notice: Option<&str>) {
    let mut lines = match &panel.prompt {
        Some(prompt) => prompt_lines(prompt, cursor),
        None => vec![Line::from(Span::styled(
            "No more questions.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    if let Some(notice) = notice {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(notice.to_string(), Style::default().fg(Color::Red))));
    }

    let question = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Question ").borders(Borders::ALL));
    frame.render_widget(question, area);
}

/// Options past the ninth have no digit key and are reached with the cursor.
fn prompt_lines<'a>(prompt: &Prompt<'a>, cursor: usize) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(prompt.text, Style::default().add_modifier(Modifier::BOLD))),
        Line::raw(""),
    ];
    lines.extend(prompt.options.iter().enumerate().map(|(i, option)| {
        let key = if i < 9 { format!(" {} ", i + 1) } else { "   ".to_string() };
        let (marker, label_style) = if i == cursor {
            ("▶", Style::default().add_modifier(Modifier::REVERSED))
        } else {
            (" ", Style::default())
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(key, Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::styled(format!(" {}", option.label), label_style),
        ])
    }));
    lines
}

fn draw_log(frame: &mut Frame, area: Rect, panel: &PanelView) {
    let mut lines: Vec<Line> = panel
        .history
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::raw(format!("{} ", entry.question)),
                Span::styled(entry.answer.clone(), Style::default().fg(Color::Green)),
                Span::styled(format!(" → {}", entry.remaining), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    if let Some(cities) = &panel.listing {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("Still possible:", Style::default().add_modifier(Modifier::BOLD))));
        lines.extend(cities.iter().map(|city| Line::raw(format!("  {}", city.display_name()))));
    }

    let log = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Log ").borders(Borders::ALL));
    frame.render_widget(log, area);
}

fn draw_keys(frame: &mut Frame, area: Rect) {
    let keys = Paragraph::new("1-9/↑↓⏎ answer · r reset · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(keys, area);
}

fn draw_summary(frame: &mut Frame, area: Rect, summary: &Summary) {
    let (title, color, mut lines): (&str, Color, Vec<Line>) = match summary {
        Summary::Solved(city) => (
            " Found it ",
            Color::Green,
            vec![
                Line::from(Span::styled(
                    city.display_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ],
        ),
        Summary::Exhausted(cities) => (
            " Out of questions ",
            Color::Yellow,
            std::iter::once(Line::raw("It is one of:"))
                .chain(cities.iter().map(|city| Line::raw(format!("  {}", city.display_name()))))
                .collect(),
        ),
        Summary::Contradiction => (
            " No match ",
            Color::Red,
            vec![Line::raw("No city fits those answers.")],
        ),
    };
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Press r to play again", Style::default().fg(Color::DarkGray))));

    let height = (lines.len() as u16).saturating_add(2);
    let overlay = center_rect(area, 40, height);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(Clear, overlay);
    frame.render_widget(paragraph, overlay);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
