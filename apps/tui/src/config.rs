use color_eyre::eyre::eyre;
use dotenv::dotenv;
use portfolio_core::SiteConfig;
use std::env;
use std::path::PathBuf;

/// Everything the terminal viewer reads from `.env` and the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub prefs_path: PathBuf,
}

/// Initializes the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;
    let site = site_config_from_env(SiteConfig::default());

    let prefs_path = env::var("PORTFOLIO_PREFS")
        .map_or_else(|_| base_dir.join("portfolio-prefs.json"), PathBuf::from);
    if prefs_path.as_os_str().is_empty() {
        return Err(eyre!("PORTFOLIO_PREFS is set but empty"));
    }

    log::debug!(
        "projects from {}, stats for {}, prefs in {}",
        site.projects_url,
        site.github_user,
        prefs_path.display()
    );

    Ok(AppConfig { site, prefs_path })
}

/// Applies `PORTFOLIO_*` overrides on top of `site`.
pub fn site_config_from_env(mut site: SiteConfig) -> SiteConfig {
    if let Ok(projects) = env::var("PORTFOLIO_PROJECTS") {
        site.projects_url = projects;
    }
    if let Ok(user) = env::var("PORTFOLIO_GITHUB_USER") {
        site.github_user = user;
    }
    if let Ok(action) = env::var("PORTFOLIO_CONTACT_ACTION") {
        site.contact_action = action;
    }
    if let Ok(heading) = env::var("PORTFOLIO_HEADING") {
        site.page_heading = heading;
    }
    if let Ok(count) = env::var("PORTFOLIO_HOME_COUNT") {
        match count.trim().parse() {
            Ok(count) => site.home_project_count = count,
            Err(_) => log::warn!(
                "ignoring PORTFOLIO_HOME_COUNT={count:?}, keeping {}",
                site.home_project_count
            ),
        }
    }
    site
}

/// Whether a projects source should be fetched over HTTP instead of read
/// from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
