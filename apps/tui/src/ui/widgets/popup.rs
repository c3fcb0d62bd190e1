use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::ui::theme::Palette;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

pub fn render_help_popup(palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 70, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());

    let paragraph = Paragraph::new(Text::from(help_lines(palette)))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press F1 or Esc to close",
        palette.muted(),
    )))
    .alignment(Alignment::Center);
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn help_lines(palette: &Palette) -> Vec<TextLine<'static>> {
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let shortcut = |key: &'static str, action: &'static str| {
        TextLine::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::raw(action),
        ])
    };

    vec![
        TextLine::from(Span::styled(
            "Portfolio",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        shortcut("Tab", "Move focus (search, legend, nav, theme, form)"),
        shortcut("Shift+Tab", "Move focus back"),
        shortcut("Left/Right", "Pick a nav link, or change theme"),
        shortcut("Enter", "Open link, toggle legend year, send form"),
        shortcut("Up/Down", "Walk the legend or the contact fields"),
        shortcut("Typing", "Edit the search box or the focused field"),
        shortcut("Esc", "Clear search, or quit outside text fields"),
        shortcut("PgUp/PgDn", "Scroll project cards"),
        shortcut("Mouse", "Click a pie slice or legend entry"),
        shortcut("Ctrl+C", "Quit"),
    ]
}
