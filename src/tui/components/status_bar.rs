//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, ConnectionStatus};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let status_color = match app.connection_status {
        ConnectionStatus::Connected => Color::Green,
        ConnectionStatus::Disconnected => Color::Red,
    };

    let last_close = app
        .chart
        .series()
        .last()
        .map(|point| format!(" {:.2} ", point.close))
        .unwrap_or_else(|| " -- ".to_string());

    let spans = vec![
        Span::styled(
            format!(" {} ", app.connection_status.label()),
            Style::default().fg(status_color),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", app.symbol),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("│"),
        Span::styled(
            last_close,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│"),
        Span::raw(format!(" {} candles ", app.chart.series().len())),
    ];

    let line = Line::from(spans);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
