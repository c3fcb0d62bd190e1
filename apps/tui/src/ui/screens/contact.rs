use portfolio_core::{Focus, Site};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::Palette;

pub fn render_contact(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let form = &site.contact;
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .enumerate()
        .map(|(index, _)| {
            if index + 1 == form.fields.len() {
                Constraint::Min(5)
            } else {
                Constraint::Length(3)
            }
        })
        .collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let form_focused = site.focus == Focus::Form;
    for (index, field) in form.fields.iter().enumerate() {
        let focused = form_focused && index == site.contact_cursor;
        let mut text = field.value.clone();
        if focused {
            text.push('▏');
        }
        let input = Paragraph::new(text).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(focused))
                .title(field.label.clone()),
        );
        f.render_widget(input, rows[index]);
    }

    let hint = Line::from(vec![
        Span::styled(format!("Sends to {}", form.action), palette.muted()),
        Span::styled("   ↑/↓ field  Enter send", palette.muted()),
    ]);
    f.render_widget(Paragraph::new(hint), rows[form.fields.len()]);
}
