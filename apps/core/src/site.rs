//! Interaction state shared by the terminal and web front ends. Both map
//! their own key events onto [`Key`] and act on the returned [`Command`].

use crate::chart::ChartModel;
use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::domain::Project;
use crate::nav::{default_pages, nav_links, Location, NavLink, NavPage};
use crate::page::ProjectsPage;
use crate::profile::ProfileStats;
use crate::render::{render_projects, CardList};
use crate::theme::ColorScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Projects,
    Contact,
}

impl Screen {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Projects => "projects/",
            Self::Contact => "contact/",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Screen served at `pathname` under `base`, if the app has one.
    pub fn from_path(pathname: &str, base: &str) -> Option<Self> {
        let relative = pathname
            .strip_prefix(base)
            .unwrap_or_else(|| pathname.trim_start_matches('/'));
        let relative = relative.trim_end_matches("index.html");
        match relative.trim_end_matches('/') {
            "" => Some(Self::Home),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    const fn focus_order(self) -> &'static [Focus] {
        match self {
            Self::Home => &[Focus::Nav, Focus::Theme],
            Self::Projects => &[Focus::Search, Focus::Legend, Focus::Nav, Focus::Theme],
            Self::Contact => &[Focus::Form, Focus::Nav, Focus::Theme],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav,
    Theme,
    Search,
    Legend,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Esc,
}

/// Side effects the front end has to carry out after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Navigate {
        href: String,
        external: bool,
        screen: Option<Screen>,
    },
    SchemeChanged(ColorScheme),
    Submit(String),
}

#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub location: Location,
    pub pages: Vec<NavPage>,
    pub links: Vec<NavLink>,
    pub nav_cursor: usize,
    pub screen: Screen,
    pub focus: Focus,
    pub scheme: ColorScheme,
    pub page: Option<ProjectsPage>,
    pub cards: CardList,
    pub chart: ChartModel,
    pub home_cards: CardList,
    pub stats: Option<ProfileStats>,
    pub contact: ContactForm,
    pub contact_cursor: usize,
    pub legend_cursor: usize,
}

impl Site {
    pub fn new(config: SiteConfig, location: Location, scheme: ColorScheme) -> Self {
        let pages = default_pages(&config.github_user);
        let links = nav_links(&pages, &location);
        let screen = Screen::from_path(&location.pathname, location.base_path())
            .unwrap_or(Screen::Home);
        let nav_cursor = links.iter().position(|link| link.current).unwrap_or(0);
        let contact = ContactForm::mailto(&config.contact_action);

        Self {
            config,
            location,
            pages,
            links,
            nav_cursor,
            screen,
            focus: screen.focus_order()[0],
            scheme,
            page: None,
            cards: CardList::default(),
            chart: ChartModel::default(),
            home_cards: CardList::default(),
            stats: None,
            contact,
            contact_cursor: 0,
            legend_cursor: 0,
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.page.is_none()
    }

    /// Installs the loaded projects and draws the home cards, the project
    /// cards and the chart.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        log::info!("loaded {} projects", projects.len());
        let latest: Vec<&Project> = projects
            .iter()
            .take(self.config.home_project_count)
            .collect();
        render_projects(&latest, Some(&mut self.home_cards), "h2");

        let page = ProjectsPage::new(projects, &self.config.page_heading);
        page.render(Some(&mut self.cards), &mut self.chart);
        self.page = Some(page);
        self.legend_cursor = 0;
    }

    pub fn set_stats(&mut self, stats: ProfileStats) {
        self.stats = Some(stats);
    }

    pub fn projects_title(&self) -> String {
        self.page.as_ref().map_or_else(
            || Screen::Projects.title().to_string(),
            |page| page.title(Screen::Projects.title()),
        )
    }

    /// Switches screens in place, as a terminal front end does instead of
    /// loading a new page.
    pub fn show(&mut self, screen: Screen) {
        self.screen = screen;
        self.location.pathname = format!("{}{}", self.location.base_path(), screen.path());
        self.links = nav_links(&self.pages, &self.location);
        if let Some(index) = self.links.iter().position(|link| link.current) {
            self.nav_cursor = index;
        }
        self.focus = screen.focus_order()[0];
    }

    pub const fn accepts_text(&self) -> bool {
        matches!(self.focus, Focus::Search | Focus::Form)
    }

    pub fn query_input(&mut self, query: &str) {
        if let Some(page) = self.page.as_mut() {
            page.on_query_input(query, Some(&mut self.cards), &mut self.chart);
            let drawn = page.buckets().len();
            self.legend_cursor = self.legend_cursor.min(drawn.saturating_sub(1));
        }
    }

    /// A click on slice or legend entry `index`.
    pub fn click_bucket(&mut self, index: usize) {
        if let Some(page) = self.page.as_mut() {
            page.on_bucket_click(index, Some(&mut self.cards), &mut self.chart);
            self.legend_cursor = index.min(page.buckets().len().saturating_sub(1));
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Command {
        match key {
            Key::Tab => {
                self.cycle_focus(true);
                return Command::None;
            }
            Key::BackTab => {
                self.cycle_focus(false);
                return Command::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Nav => self.handle_nav_key(key),
            Focus::Theme => self.handle_theme_key(key),
            Focus::Search => {
                self.handle_search_key(key);
                Command::None
            }
            Focus::Legend => {
                self.handle_legend_key(key);
                Command::None
            }
            Focus::Form => self.handle_form_key(key),
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.screen.focus_order();
        let position = order
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        let next = if forward {
            (position + 1) % order.len()
        } else {
            (position + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    fn handle_nav_key(&mut self, key: Key) -> Command {
        let len = self.links.len();
        match key {
            Key::Left if len > 0 => self.nav_cursor = (self.nav_cursor + len - 1) % len,
            Key::Right if len > 0 => self.nav_cursor = (self.nav_cursor + 1) % len,
            Key::Enter => {
                let Some(link) = self.links.get(self.nav_cursor) else {
                    return Command::None;
                };
                let screen = if link.external {
                    None
                } else {
                    Screen::from_path(&link.href, self.location.base_path())
                };
                return Command::Navigate {
                    href: link.href.clone(),
                    external: link.external,
                    screen,
                };
            }
            _ => {}
        }
        Command::None
    }

    fn handle_theme_key(&mut self, key: Key) -> Command {
        self.scheme = match key {
            Key::Right | Key::Down | Key::Enter | Key::Char(' ') => self.scheme.next(),
            Key::Left | Key::Up => self.scheme.previous(),
            _ => return Command::None,
        };
        Command::SchemeChanged(self.scheme)
    }

    fn handle_search_key(&mut self, key: Key) {
        let Some(current) = self.page.as_ref().map(|page| page.query().to_string()) else {
            return;
        };
        let mut query = current;
        match key {
            Key::Char(ch) => query.push(ch),
            Key::Backspace => {
                query.pop();
            }
            Key::Esc => query.clear(),
            Key::Down => {
                self.focus = Focus::Legend;
                return;
            }
            _ => return,
        }
        self.query_input(&query);
    }

    fn handle_legend_key(&mut self, key: Key) {
        let drawn = self.chart.legend.len();
        match key {
            Key::Up if self.legend_cursor == 0 => self.focus = Focus::Search,
            Key::Up => self.legend_cursor -= 1,
            Key::Down if self.legend_cursor + 1 < drawn => self.legend_cursor += 1,
            Key::Enter | Key::Char(' ') if drawn > 0 => self.click_bucket(self.legend_cursor),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: Key) -> Command {
        let len = self.contact.fields.len();
        match key {
            Key::Up if len > 0 => self.contact_cursor = (self.contact_cursor + len - 1) % len,
            Key::Down if len > 0 => self.contact_cursor = (self.contact_cursor + 1) % len,
            Key::Char(ch) => {
                if let Some(field) = self.contact.field_mut(self.contact_cursor) {
                    field.value.push(ch);
                }
            }
            Key::Backspace => {
                if let Some(field) = self.contact.field_mut(self.contact_cursor) {
                    field.value.pop();
                }
            }
            Key::Enter => return Command::Submit(self.contact.submit_url()),
            _ => {}
        }
        Command::None
    }
}
