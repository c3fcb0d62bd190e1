use portfolio_core::loader::{check_status, loaded_or_log, parse_json, parse_projects};
use portfolio_core::profile::{github_user_url, ProfileStats};
use portfolio_core::{Error, Project};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;

use portfolio_tui::config::is_remote;

const USER_AGENT: &str = concat!("portfolio_tui/", env!("CARGO_PKG_VERSION"));

/// Loads projects from a file or URL. Failures are logged and yield `None`.
pub async fn load_projects(source: &str) -> Option<Vec<Project>> {
    loaded_or_log(source, read_projects(source).await)
}

async fn read_projects(source: &str) -> portfolio_core::Result<Vec<Project>> {
    if is_remote(source) {
        return fetch_json(source).await;
    }
    let body = tokio::fs::read_to_string(source).await?;
    parse_projects(&body)
}

/// GETs `url` and decodes the body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> portfolio_core::Result<T> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(network_error)?;

    let response = client.get(url).send().await.map_err(network_error)?;
    let status = response.status();
    check_status(status.as_u16(), status.canonical_reason().unwrap_or_default())?;

    let body = response.text().await.map_err(network_error)?;
    parse_json(&body)
}

pub async fn fetch_profile_stats(username: &str) -> Option<ProfileStats> {
    let url = github_user_url(username);
    loaded_or_log(&url, fetch_json(&url).await)
}

/// Starts the stats request in the background. The UI loop drains the
/// receiver between frames.
pub fn spawn_stats_fetch(username: String) -> mpsc::Receiver<Option<ProfileStats>> {
    let (sender, receiver) = mpsc::channel(1);
    tokio::spawn(async move {
        let stats = fetch_profile_stats(&username).await;
        if sender.send(stats).await.is_err() {
            log::debug!("stats arrived after the UI closed");
        }
    });
    receiver
}

fn network_error(error: reqwest::Error) -> Error {
    Error::Network(error.to_string())
}
