use portfolio_core::profile::ProfileStats;
use portfolio_core::theme::{load_color_scheme, save_color_scheme};
use portfolio_core::nav::Location;
use portfolio_core::{ColorScheme, Command, Project, Site};
use portfolio_tui::config::AppConfig;
use portfolio_tui::prefs::FilePreferenceStore;
use throbber_widgets_tui::ThrobberState;
use std::time::{Duration, Instant};

const THROBBER_STEP: Duration = Duration::from_millis(120);

/// Host the terminal viewer pretends to be served from, so links resolve
/// against the root base path.
pub const LOCAL_HOST: &str = "localhost";

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub site: Site,
    pub prefs: FilePreferenceStore,
    pub status_message: String,
    pub show_help: bool,
    pub stats_pending: bool,
    pub throbber: ThrobberState,
    pub card_scroll: u16,
    pub last_frame: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let prefs = FilePreferenceStore::open(&config.prefs_path);
        let scheme = load_color_scheme(&prefs).unwrap_or_default();
        let site = Site::new(config.site, Location::new(LOCAL_HOST, "/"), scheme);

        Self {
            running: true,
            site,
            prefs,
            status_message: String::new(),
            show_help: false,
            stats_pending: false,
            throbber: ThrobberState::default(),
            card_scroll: 0,
            last_frame: Instant::now(),
        }
    }

    pub fn load(&mut self, projects: Vec<Project>) {
        self.site.set_projects(projects);
        self.card_scroll = 0;
    }

    /// Applies `--query` and `--year` before the first frame.
    pub fn apply_startup_filter(&mut self, query: Option<&str>, year: Option<&str>) {
        if let Some(query) = query {
            self.site.query_input(query);
        }
        let Some(year) = year else {
            return;
        };
        let index = self.site.page.as_ref().and_then(|page| {
            page.buckets()
                .iter()
                .position(|bucket| bucket.label.as_deref() == Some(year))
        });
        match index {
            Some(index) => self.site.click_bucket(index),
            None => self.status_message = format!("No projects from {year}"),
        }
    }

    /// Advances the loading spinner while the stats request is in flight.
    pub fn update(&mut self) {
        let now = Instant::now();
        if self.stats_pending && now.duration_since(self.last_frame) >= THROBBER_STEP {
            self.throbber.calc_next();
            self.last_frame = now;
        }
    }

    /// A `None` result leaves the stats panel as it was.
    pub fn apply_stats(&mut self, stats: Option<ProfileStats>) {
        self.stats_pending = false;
        if let Some(stats) = stats {
            self.site.set_stats(stats);
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.site.scheme
    }

    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Navigate {
                screen: Some(screen),
                ..
            } => {
                self.site.show(screen);
                self.card_scroll = 0;
                self.status_message.clear();
            }
            Command::Navigate { href, .. } => {
                self.status_message = format!("Open {href} in a browser");
            }
            Command::SchemeChanged(scheme) => {
                save_color_scheme(&mut self.prefs, scheme);
                self.status_message = format!("Theme: {}", scheme.label());
            }
            Command::Submit(url) => {
                log::info!("contact form submitted to {url}");
                self.status_message = format!("Send via {url}");
            }
        }
    }
}
