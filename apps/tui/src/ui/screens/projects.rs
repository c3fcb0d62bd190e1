use portfolio_core::{Focus, Site};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Palette;
use crate::ui::widgets::cards::render_cards;
use crate::ui::widgets::pie::{render_legend, render_pie};

const SEARCH_PLACEHOLDER: &str = "🔍 Search projects…";

/// Areas of the projects screen, shared by drawing and mouse hit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectsLayout {
    pub search: Rect,
    pub pie: Rect,
    pub legend: Rect,
    pub cards: Rect,
}

pub fn projects_layout(area: Rect) -> ProjectsLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);
    let chart = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(rows[1]);

    ProjectsLayout {
        search: rows[0],
        pie: chart[0],
        legend: chart[1],
        cards: rows[2],
    }
}

pub fn render_projects_screen(
    site: &Site,
    scroll: u16,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let layout = projects_layout(area);
    render_search(site, palette, f, layout.search);
    render_pie(&site.chart, palette, f, layout.pie);
    render_legend(
        &site.chart,
        site.legend_cursor,
        site.focus == Focus::Legend,
        palette,
        f,
        layout.legend,
    );

    let title = site.projects_title();
    if site.is_loading() {
        let loading = Paragraph::new("Loading projects…")
            .style(palette.muted())
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(loading, layout.cards);
        return;
    }
    render_cards(&site.cards, &title, scroll, palette, f, layout.cards);
}

fn render_search(site: &Site, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let focused = site.focus == Focus::Search;
    let query = site.page.as_ref().map_or("", |page| page.query());

    let mut spans = if query.is_empty() && !focused {
        vec![Span::styled(SEARCH_PLACEHOLDER, palette.muted())]
    } else {
        vec![Span::raw(query.to_string())]
    };
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(focused))
            .title("Search"),
    );
    f.render_widget(search, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stacks_search_chart_and_cards() {
        let layout = projects_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.search, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.pie, Rect::new(0, 3, 30, 12));
        assert_eq!(layout.legend, Rect::new(30, 3, 50, 12));
        assert_eq!(layout.cards, Rect::new(0, 15, 80, 15));
    }
}
