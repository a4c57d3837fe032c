//! Scrolling log panel, most recent entry on top.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

/// Renders the log panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    let max_rows = inner.height as usize;
    for entry in app.log.iter().take(max_rows) {
        let message_color = if entry.message.starts_with("ERROR:") {
            Color::Red
        } else {
            Color::White
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", entry.timestamp),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(entry.message.clone(), Style::default().fg(message_color)),
        ]));
    }

    if app.log.is_empty() {
        lines.push(Line::from(Span::styled(
            "No log entries",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let para = Paragraph::new(lines);
    frame.render_widget(para, inner);
}
