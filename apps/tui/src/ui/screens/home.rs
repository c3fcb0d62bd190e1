use portfolio_core::Site;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::theme::Palette;
use crate::ui::widgets::cards::render_cards;

pub fn render_home(
    site: &Site,
    throbber: &mut ThrobberState,
    stats_pending: bool,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let title = if site.is_loading() {
        "Latest Projects (loading…)"
    } else {
        "Latest Projects"
    };
    render_cards(&site.home_cards, title, 0, palette, f, chunks[0]);
    render_stats(site, throbber, stats_pending, palette, f, chunks[1]);
}

fn render_stats(
    site: &Site,
    throbber: &mut ThrobberState,
    stats_pending: bool,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title(format!("GitHub @{}", site.config.github_user));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if stats_pending {
        let throbber_area = Rect { height: 1, ..inner };
        let widget = Throbber::default()
            .label("Fetching profile stats")
            .style(palette.muted())
            .throbber_style(Style::default().fg(palette.accent));
        f.render_stateful_widget(widget, throbber_area, throbber);
    }

    // The panel stays empty until the stats arrive.
    let Some(stats) = site.stats else {
        return;
    };
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let lines: Vec<Line<'_>> = stats
        .rows()
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<14}"), label_style),
                Span::styled(value.to_string(), Style::default().fg(palette.accent)),
            ])
        })
        .collect();
    let rows_area = Rect {
        y: inner.y + u16::from(stats_pending),
        height: inner.height.saturating_sub(u16::from(stats_pending)),
        ..inner
    };
    f.render_widget(Paragraph::new(lines), rows_area);
}
