//! Agent decision panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use rust_decimal::Decimal;

use crate::models::AgentDecision;
use crate::tui::app::App;

/// Renders the agent decision panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Agent Decision ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(decision) = &app.decision else {
        let para = Paragraph::new("No decision yet").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    };

    let mut lines = vec![action_line(decision)];

    if !decision.reason.is_empty() {
        lines.push(Line::from(Span::styled(
            decision.reason.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("Balance: "),
        Span::styled(
            format!("${:.2}", decision.balance),
            Style::default().fg(Color::White),
        ),
        Span::raw("  Equity: "),
        Span::styled(
            format!("${:.2}", decision.equity),
            Style::default().fg(Color::White),
        ),
    ]));

    if let Some(pnl) = decision.realized_pnl {
        let pnl_color = if pnl >= Decimal::ZERO {
            Color::Green
        } else {
            Color::Red
        };
        let mut spans = vec![
            Span::raw("P&L: "),
            Span::styled(format!("{:+.2}", pnl), Style::default().fg(pnl_color)),
        ];
        if let Some(roi) = decision.roi_pct {
            spans.push(Span::styled(
                format!(" ({:+.2}%)", roi),
                Style::default().fg(pnl_color),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.extend(position_lines(decision));

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

/// The headline action line, with trade detail when present.
fn action_line(decision: &AgentDecision) -> Line<'static> {
    let mut spans = vec![Span::styled(
        decision.action.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let (Some(qty), Some(price)) = (decision.quantity, decision.price) {
        spans.push(Span::raw(format!(" {:.4} @ {:.2}", qty, price)));
    }
    if let Some(symbol) = &decision.symbol {
        spans.push(Span::styled(
            format!("  {}", symbol),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

/// Position detail, or the "no open position" placeholder.
///
/// An open position requires `LONG` side and a strictly positive size;
/// any other combination ignores the optional detail fields entirely.
fn position_lines(decision: &AgentDecision) -> Vec<Line<'static>> {
    if !decision.has_open_position() {
        return vec![Line::from(Span::styled(
            "No open position",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let size = decision.position_size.unwrap_or(Decimal::ZERO);
    let mut lines = vec![Line::from(vec![
        Span::styled(
            "LONG ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{:.4}", size)),
    ])];

    if let Some(entry) = decision.entry_price {
        lines.push(Line::from(Span::raw(format!("Entry:    {:.2}", entry))));
    }
    if let Some(notional) = decision.notional {
        lines.push(Line::from(Span::raw(format!("Notional: {:.2}", notional))));
    }
    if let Some(tp) = decision.take_profit {
        lines.push(Line::from(vec![
            Span::raw("TP: "),
            Span::styled(format!("{:.2}", tp), Style::default().fg(Color::Green)),
        ]));
    }
    if let Some(sl) = decision.stop_loss {
        lines.push(Line::from(vec![
            Span::raw("SL: "),
            Span::styled(format!("{:.2}", sl), Style::default().fg(Color::Red)),
        ]));
    }
    if let Some(open_time) = &decision.open_time {
        lines.push(Line::from(Span::styled(
            format!("Since {}", open_time),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}
