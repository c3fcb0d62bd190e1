pub mod screens;
pub mod theme;
pub mod widgets;

use portfolio_core::Screen;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use screens::contact::render_contact;
use screens::home::render_home;
use screens::projects::render_projects_screen;
use theme::palette;
use widgets::nav::render_header;
use widgets::popup::render_help_popup;

const SHORTCUTS: &str = "Tab focus · ←/→ nav · Enter open · PgUp/PgDn scroll · F1 help · Esc quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn frame_layout(area: Rect) -> FrameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    FrameLayout {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    let palette = palette(app.scheme());
    let area = f.area();
    f.render_widget(Block::default().style(palette.base()), area);

    let layout = frame_layout(area);
    render_header(&app.site, &palette, f, layout.header);

    match app.site.screen {
        Screen::Home => render_home(
            &app.site,
            &mut app.throbber,
            app.stats_pending,
            &palette,
            f,
            layout.body,
        ),
        Screen::Projects => {
            render_projects_screen(&app.site, app.card_scroll, &palette, f, layout.body);
        }
        Screen::Contact => render_contact(&app.site, &palette, f, layout.body),
    }

    let status = if app.status_message.is_empty() {
        Span::styled(SHORTCUTS, palette.muted())
    } else {
        Span::styled(
            app.status_message.clone(),
            Style::default().fg(palette.accent),
        )
    };
    let status_bar = Paragraph::new(Line::from(status)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted())
            .title(app.site.location.pathname.clone()),
    );
    f.render_widget(status_bar, layout.status);

    if app.show_help {
        render_help_popup(&palette, f, area);
    }
}
