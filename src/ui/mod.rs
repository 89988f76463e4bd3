//! Rendering for Larder's TUI.

pub mod modals;
pub mod table;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Modal};
use crate::theme::palette;

/// Render the whole frame: search bar, item table, footer, and any modal.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = palette(app.theme_mode);
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Search bar
    let search = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(th.muted)),
        Span::styled(app.input.clone(), Style::default().fg(th.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.border))
            .title(Span::styled(" Larder ", Style::default().fg(th.accent))),
    );
    f.render_widget(search, chunks[0]);

    table::render_table(f, app, chunks[1]);

    // Footer: key hints, read-only marker
    let mut hints = String::from(
        "type to search  ↑/↓ select  Enter edit  ^A add  ^D delete  ^S sort  ^T theme  Esc quit",
    );
    if app.read_only {
        hints.push_str("  [read-only]");
    }
    let footer = Paragraph::new(Span::styled(hints, Style::default().fg(th.muted)));
    f.render_widget(footer, chunks[2]);

    if let Modal::Editor(_) = &app.modal {
        modals::render_editor(f, app, area);
    }
}
