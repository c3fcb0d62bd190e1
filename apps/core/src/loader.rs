use serde::de::DeserializeOwned;

use crate::domain::Project;
use crate::error::{Error, Result};

pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_projects(body: &str) -> Result<Vec<Project>> {
    parse_json(body)
}

/// Any 2xx status passes; everything else becomes [`Error::Http`].
pub fn check_status(status: u16, status_text: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Http {
            status,
            status_text: status_text.to_string(),
        })
    }
}

/// Turns a failed load into `None` after logging it, so no error reaches
/// the page.
pub fn loaded_or_log<T>(url: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            log::error!("Error fetching JSON from {url}: {error}");
            None
        }
    }
}
