mod console;
mod dom;
mod fetch;
mod input;
mod storage;
mod view;

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use portfolio_core::loader::loaded_or_log;
use portfolio_core::profile::{github_user_url, ProfileStats};
use portfolio_core::theme::{load_color_scheme, save_color_scheme};
use portfolio_core::{Command, Focus, Site, SiteConfig};
use ratzilla::event::{MouseButton, MouseEvent, MouseEventKind};
use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

use storage::LocalStorage;
use view::ChartHit;

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    console::init(log::LevelFilter::Info);

    let store = LocalStorage::open();
    let scheme = load_color_scheme(&store).unwrap_or_default();
    dom::apply_color_scheme(scheme);

    let site = Rc::new(RefCell::new(Site::new(
        site_config(),
        dom::current_location(),
        scheme,
    )));
    let store = Rc::new(RefCell::new(store));

    spawn_local(load_projects(site.clone()));
    spawn_local(load_stats(site.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;
    let frame_area = Rc::new(Cell::new(Rect::default()));

    let keys = terminal.on_key_event({
        let site = site.clone();
        let store = store.clone();
        move |event| {
            let Some(key) = input::site_key(&event.code, event.shift) else {
                return;
            };
            let command = site.borrow_mut().handle_key(key);
            run_command(command, &mut store.borrow_mut());
        }
    });
    if let Err(error) = keys {
        log::error!("keyboard input unavailable: {error}");
    }

    let mouse = terminal.on_mouse_event({
        let site = site.clone();
        let frame_area = frame_area.clone();
        move |event| handle_click(&mut site.borrow_mut(), frame_area.get(), &event)
    });
    if let Err(error) = mouse {
        log::error!("mouse input unavailable: {error}");
    }

    terminal.draw_web(move |f| {
        frame_area.set(f.area());
        view::render(&site.borrow(), dom::prefers_dark(), f);
    });

    Ok(())
}

/// Left clicks on a slice or legend entry toggle that year.
fn handle_click(site: &mut Site, area: Rect, event: &MouseEvent) {
    if event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
        return;
    }
    match view::chart_hit(site, area, event.col, event.row) {
        Some(ChartHit::Slice(index)) => site.click_bucket(index),
        Some(ChartHit::Legend(index)) => {
            site.focus = Focus::Legend;
            site.click_bucket(index);
        }
        None => {}
    }
}

/// Defaults, with the GitHub user and projects source fixed at build time
/// when the matching variables are set.
fn site_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    if let Some(user) = option_env!("PORTFOLIO_GITHUB_USER") {
        config.github_user = user.to_string();
    }
    if let Some(projects) = option_env!("PORTFOLIO_PROJECTS") {
        config.projects_url = projects.to_string();
    }
    config
}

fn run_command(command: Command, store: &mut LocalStorage) {
    match command {
        Command::None => {}
        Command::Navigate { href, external, .. } => dom::open(&href, external),
        Command::SchemeChanged(scheme) => {
            save_color_scheme(store, scheme);
            dom::apply_color_scheme(scheme);
        }
        Command::Submit(url) => dom::open(&url, false),
    }
}

/// Relative sources resolve against the site's base path so every page
/// fetches the same file.
fn projects_url(site: &Site) -> String {
    let source = &site.config.projects_url;
    if source.starts_with("http://") || source.starts_with("https://") || source.starts_with('/') {
        source.clone()
    } else {
        format!("{}{source}", site.location.base_path())
    }
}

async fn load_projects(site: Rc<RefCell<Site>>) {
    let url = projects_url(&site.borrow());
    let projects = loaded_or_log(&url, fetch::fetch_projects(&url).await).unwrap_or_default();
    site.borrow_mut().set_projects(projects);
}

async fn load_stats(site: Rc<RefCell<Site>>) {
    let url = github_user_url(&site.borrow().config.github_user);
    if let Some(stats) = loaded_or_log(&url, fetch::fetch_json::<ProfileStats>(&url).await) {
        site.borrow_mut().set_stats(stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::nav::Location;
    use portfolio_core::{ColorScheme, Project, ProjectsPage, Screen};

    fn click(kind: MouseEventKind, col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            col,
            row,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    #[test]
    fn left_press_on_legend_toggles_year() {
        let mut site = Site::new(
            SiteConfig::default(),
            Location::new("localhost", "/projects/"),
            ColorScheme::Automatic,
        );
        site.set_projects(vec![
            Project::new("Weather Station", "Sensors", "2020"),
            Project::new("Portfolio", "Static site", "2021"),
        ]);
        site.show(Screen::Projects);
        let area = Rect::new(0, 0, 100, 40);
        // second legend row of the default layout
        let (col, row) = (35, 9);

        let press = MouseEventKind::ButtonDown(MouseButton::Left);
        handle_click(&mut site, area, &click(MouseEventKind::Moved, col, row));
        handle_click(&mut site, area, &click(press, col, row));
        assert_eq!(site.focus, Focus::Legend);
        assert_eq!(site.page.as_ref().and_then(ProjectsPage::selected), Some(1));

        handle_click(&mut site, area, &click(press, col, row));
        assert_eq!(site.page.as_ref().and_then(ProjectsPage::selected), None);
    }
}
