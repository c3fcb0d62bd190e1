use thiserror::Error;

/// Failures surfaced by loading, parsing and preference storage.
///
/// None of these reach the page: callers log them and fall back to empty or
/// absent data.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to fetch: {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_mentions_status_text() {
        let error = Error::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to fetch: 404 Not Found");
    }

    #[test]
    fn json_error_converts_with_question_mark() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{")?)
        }

        assert!(matches!(parse(), Err(Error::Json(_))));
    }

    #[test]
    fn io_error_display_keeps_source_message() {
        let error: Error =
            std::io::Error::new(std::io::ErrorKind::NotFound, "projects.json missing").into();
        let display = error.to_string();
        assert!(display.starts_with("IO error"));
        assert!(display.contains("projects.json missing"));
    }
}
