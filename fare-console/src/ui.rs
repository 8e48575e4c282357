//! Terminal layout
//!
//! ```text
//! ┌ Taxi Billing ───────────────────────────────┐
//! ├ Trip ───────────────┬ Logs ─────────────────┤
//! │ Customer Name       │                       │
//! │ ...                 │                       │
//! ├ Result ─────────────┴───────────────────────┤
//! └ F2 Calculate  F3 Generate Bill  Esc Quit ───┘
//! ```

use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::App;
use crate::form::Field;
use crate::outcome::Severity;

const FIELD_HEIGHT: u16 = 3;

pub fn ui<A>(f: &mut Frame, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Form + logs
            Constraint::Length(3), // Result
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " 🚕 Taxi Billing ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" fare calculator & bill ledger"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_form(f, app, main_chunks[0]);

    // Logs (TuiLoggerWidget)
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, main_chunks[1]);

    draw_result(f, app, chunks[2]);

    let help = Paragraph::new(
        " Tab/↑/↓ move  F2 Calculate Fare  F3 Generate Bill  PgUp/PgDn logs  Esc quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn draw_form<A>(f: &mut Frame, app: &App<A>, area: Rect) {
    let block = Block::default()
        .title(" Trip ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            Field::ALL
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

    for (field, row) in Field::ALL.iter().zip(rows.iter()) {
        let focused = app.form.focused() == *field;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let input = app.form.input(*field);
        let width = row.width.max(3) - 3;
        let scroll = input.visual_scroll(width as usize);
        let widget = Paragraph::new(input.value())
            .style(style)
            .scroll((0, scroll as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(format!(" {} ", field.label())),
            );
        f.render_widget(widget, *row);

        if focused && app.busy.is_none() {
            f.set_cursor_position((
                row.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
                row.y + 1,
            ));
        }
    }
}

fn draw_result<A>(f: &mut Frame, app: &App<A>, area: Rect) {
    let block = Block::default().title(" Result ").borders(Borders::ALL);

    let line = if let Some(action) = app.busy {
        Line::from(Span::styled(
            format!("⏳ {}", action.busy_label()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(outcome) = &app.outcome {
        let style = match outcome.severity() {
            Severity::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Severity::Error => Style::default().fg(Color::Red),
            Severity::Connection => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        };
        Line::from(Span::styled(outcome.message(), style))
    } else {
        Line::from(Span::styled(
            "Fill in the trip and press F2",
            Style::default().fg(Color::DarkGray),
        ))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
