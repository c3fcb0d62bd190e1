use serde::{Deserialize, Serialize};

/// Site-wide settings. Missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub github_user: String,
    pub projects_url: String,
    pub contact_action: String,
    pub home_project_count: usize,
    pub page_heading: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_user: "marcarcos".to_string(),
            projects_url: "lib/projects.json".to_string(),
            contact_action: "mailto:hello@example.com".to_string(),
            home_project_count: 3,
            page_heading: "h2".to_string(),
        }
    }
}
