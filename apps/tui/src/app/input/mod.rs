mod helpers;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use portfolio_core::{Focus, Screen};
use ratatui::layout::{Position, Rect};

use crate::app::state::App;
use crate::ui::frame_layout;
use crate::ui::screens::projects::projects_layout;
use crate::ui::widgets::pie::{bucket_at, legend_at};

const SCROLL_STEP: u16 = 5;

pub fn handle_key_event(app: &mut App, event: KeyEvent) {
    if helpers::is_interrupt(event) {
        app.running = false;
        return;
    }

    if app.show_help {
        if matches!(event.code, KeyCode::F(1) | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match event.code {
        KeyCode::F(1) => app.show_help = true,
        KeyCode::Esc if !app.site.accepts_text() => app.running = false,
        KeyCode::PageDown => app.card_scroll = app.card_scroll.saturating_add(SCROLL_STEP),
        KeyCode::PageUp => app.card_scroll = app.card_scroll.saturating_sub(SCROLL_STEP),
        _ => {
            let Some(key) = helpers::site_key(event) else {
                return;
            };
            let command = app.site.handle_key(key);
            app.apply_command(command);
        }
    }
}

/// Left clicks on a pie slice or legend entry toggle that year. `area` is
/// the full frame the UI was drawn into.
pub fn handle_mouse_event(app: &mut App, event: MouseEvent, area: Rect) {
    if app.show_help || app.site.screen != Screen::Projects {
        return;
    }
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let position = Position::new(event.column, event.row);
    let layout = projects_layout(frame_layout(area).body);
    if let Some(index) = bucket_at(&app.site.chart, layout.pie, position) {
        click_bucket(app, index);
    } else if let Some(index) = legend_at(
        &app.site.chart,
        layout.legend,
        app.site.legend_cursor,
        position,
    ) {
        app.site.focus = Focus::Legend;
        click_bucket(app, index);
    }
}

fn click_bucket(app: &mut App, index: usize) {
    log::debug!("click on bucket {index}");
    app.site.click_bucket(index);
    app.card_scroll = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use portfolio_core::{Project, SiteConfig};
    use portfolio_tui::config::AppConfig;

    fn app_in(dir: &tempfile::TempDir) -> App {
        let mut app = App::new(AppConfig {
            site: SiteConfig::default(),
            prefs_path: dir.path().join("prefs.json"),
        });
        app.load(vec![
            Project::new("Weather Station", "Sensors", "2020"),
            Project::new("Portfolio", "Static site", "2021"),
        ]);
        app.site.show(Screen::Projects);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn esc_clears_search_before_quitting() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.site.cards.cards.len(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(app.running);
        assert_eq!(app.site.cards.cards.len(), 2);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn help_popup_swallows_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        press(&mut app, KeyCode::F(1));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.show_help);
        assert_eq!(app.site.page.as_ref().map(|page| page.query()), Some(""));

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn ctrl_c_quits_from_text_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn legend_click_toggles_year() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let area = Rect::new(0, 0, 80, 30);
        let legend = projects_layout(frame_layout(area).body).legend;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: legend.x + 2,
            row: legend.y + 2,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse_event(&mut app, click, area);
        assert_eq!(app.site.chart.selected, Some(1));
        assert_eq!(app.site.focus, Focus::Legend);
        assert_eq!(app.site.cards.cards.len(), 1);

        handle_mouse_event(&mut app, click, area);
        assert_eq!(app.site.chart.selected, None);
        assert_eq!(app.site.cards.cards.len(), 2);
    }
}
