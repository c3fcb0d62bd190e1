use serde::{Deserialize, Serialize};

pub const GITHUB_API: &str = "https://api.github.com";

/// The four counters shown in the profile stats panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

impl ProfileStats {
    pub const fn rows(&self) -> [(&'static str, u64); 4] {
        [
            ("Public Repos:", self.public_repos),
            ("Gists:", self.public_gists),
            ("Followers:", self.followers),
            ("Following:", self.following),
        ]
    }
}

pub fn github_user_url(username: &str) -> String {
    format!("{GITHUB_API}/users/{username}")
}
