//! The add/edit form modal.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::state::{AppState, FORM_FIELDS, FormField, Modal};
use crate::theme::palette;

/// Center a `width` x `height` rect inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Render the editor form over the table.
pub fn render_editor(f: &mut Frame, app: &AppState, area: Rect) {
    let Modal::Editor(form) = &app.modal else {
        return;
    };
    let th = palette(app.theme_mode);

    let popup = centered_rect(area, 56, u16::try_from(FORM_FIELDS.len()).unwrap_or(8) + 4);
    f.render_widget(Clear, popup);

    let title = if form.editing_id.is_some() {
        " Edit item "
    } else {
        " Add item "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.accent))
        .title(Span::styled(title, Style::default().fg(th.accent)))
        .style(Style::default().bg(th.panel));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut constraints = vec![Constraint::Length(1); FORM_FIELDS.len()];
    constraints.push(Constraint::Min(0));
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in FORM_FIELDS.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.muted)
        };
        let value = match field {
            FormField::Ccp => {
                if form.is_ccp {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            _ => {
                let mut v = form.texts[i].clone();
                if focused {
                    v.push('▏');
                }
                v
            }
        };
        let line = Paragraph::new(Line::from(vec![
            Span::styled(format!("{:<20}", field.label()), label_style),
            Span::styled(value, Style::default().fg(th.text)),
        ]));
        f.render_widget(line, lines[i]);
    }

    let hint = Paragraph::new(Span::styled(
        "Tab next · Space toggles CCP · Enter save · Esc cancel",
        Style::default().fg(th.muted),
    ));
    f.render_widget(hint, lines[FORM_FIELDS.len()]);
}
