//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use super::app::App;
use super::chart;
use super::components::{decision_panel, log_panel, status_bar};

/// Renders the entire dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Status bar
            Constraint::Min(10),    // Chart + decision
            Constraint::Length(10), // Log panel
            Constraint::Length(1),  // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_layout[1]);

    chart::render(frame, content[0], &app.chart, &app.symbol);
    decision_panel::render(frame, content[1], app);

    log_panel::render(frame, main_layout[2], app);

    render_keybindings(frame, main_layout[3]);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[r]efresh [q]uit";

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
