//! The pantry item table.

use ratatui::{
    Frame,
    layout::Constraint,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use crate::logic::{RowViewModel, SlotTag};
use crate::state::AppState;
use crate::theme::{Theme, palette};

/// Color for a row's slot tag, when any.
const fn slot_color(th: &Theme, slot: SlotTag) -> ratatui::style::Color {
    match slot {
        SlotTag::Expired | SlotTag::CriticalStock => th.danger,
        SlotTag::ExpiringSoon | SlotTag::LowStock => th.warn,
    }
}

/// Build the safety cell: badges on one line, label on the next.
fn safety_cell<'a>(th: &Theme, row: &RowViewModel) -> Cell<'a> {
    let mut badges: Vec<Span<'a>> = Vec::new();
    if row.item.is_ccp {
        badges.push(Span::styled(
            "CCP ",
            Style::default().fg(th.badge).add_modifier(Modifier::BOLD),
        ));
    }
    if row.high_risk {
        badges.push(Span::styled(
            "High risk",
            Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
        ));
    }
    let mut lines = Vec::new();
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }
    lines.push(Line::from(Span::styled(
        row.safety.clone(),
        Style::default().fg(th.muted),
    )));
    Cell::from(lines)
}

/// Render the item table with per-row status styling.
pub fn render_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = palette(app.theme_mode);
    let rows = app.visible_rows();
    app.clamp_selection(rows.len());

    let header = Row::new(
        [
            "Name", "Qty", "Unit", "Category", "Storage", "Allergens", "Expiry", "Safety",
            "Suggestion",
        ]
        .into_iter()
        .map(|h| Cell::from(Span::styled(h, Style::default().fg(th.accent)))),
    )
    .height(1);

    let body = rows.iter().map(|row| {
        let base_fg = row
            .status
            .slot
            .map_or(th.text, |slot| slot_color(&th, slot));
        let style = if row.status.ccp_row {
            Style::default().fg(base_fg).bg(th.panel)
        } else {
            Style::default().fg(base_fg)
        };
        Row::new(vec![
            Cell::from(row.item.name.clone()),
            Cell::from(row.item.quantity.clone()),
            Cell::from(row.item.unit.clone()),
            Cell::from(row.category_label),
            Cell::from(row.storage_label),
            Cell::from(row.item.allergens.clone()),
            Cell::from(row.item.expiry.clone()),
            safety_cell(&th, row),
            Cell::from(Span::styled(
                row.suggestion,
                Style::default().fg(th.muted),
            )),
        ])
        .style(style)
        .height(2)
    });

    let title = format!(
        " {} item(s) · sort: {} ",
        rows.len(),
        app.sort_mode.label()
    );
    let table = Table::new(
        body,
        [
            Constraint::Fill(2),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Fill(2),
            Constraint::Fill(3),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .fg(th.accent)
            .add_modifier(Modifier::REVERSED),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.border))
            .title(Span::styled(title, Style::default().fg(th.muted))),
    );
    f.render_stateful_widget(table, area, &mut app.table_state);
}
