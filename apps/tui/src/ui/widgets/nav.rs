use portfolio_core::{Focus, Site};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::ui::theme::Palette;

const THEME_WIDTH: u16 = 24;

pub fn render_header(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(THEME_WIDTH)])
        .split(area);

    render_nav(site, palette, f, chunks[0]);
    render_theme_switch(site, palette, f, chunks[1]);
}

fn render_nav(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let focused = site.focus == Focus::Nav;
    let titles: Vec<Line<'_>> = site
        .links
        .iter()
        .map(|link| {
            let mut style = Style::default();
            if link.current {
                style = style
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            let label = if link.external {
                format!("{} ↗", link.title)
            } else {
                link.title.clone()
            };
            Line::from(Span::styled(label, style))
        })
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(focused))
                .title("Portfolio"),
        )
        .select(site.nav_cursor)
        .highlight_style(highlight)
        .divider("|");
    f.render_widget(tabs, area);
}

fn render_theme_switch(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let focused = site.focus == Focus::Theme;
    let label = if focused {
        format!("◀ {} ▶", site.scheme.label())
    } else {
        site.scheme.label().to_string()
    };
    let paragraph = Paragraph::new(Line::from(label)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(focused))
            .title("Theme"),
    );
    f.render_widget(paragraph, area);
}
