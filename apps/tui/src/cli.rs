use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio site in the terminal")]
pub struct CliArgs {
    /// Print the project summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the projects source (path or http(s) URL)
    #[arg(long, value_name = "PATH|URL")]
    pub projects: Option<String>,

    /// Override the GitHub user shown in profile stats
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Start with this search query
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Start with this year selected in the chart
    #[arg(long, value_name = "YEAR")]
    pub year: Option<String>,

    /// Write log records to this file while the UI is running
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(projects) = &self.projects {
            std::env::set_var("PORTFOLIO_PROJECTS", projects);
        }
        if let Some(user) = &self.user {
            std::env::set_var("PORTFOLIO_GITHUB_USER", user);
        }
    }

    pub const fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_flags() {
        let args = CliArgs::parse_from([
            "portfolio",
            "--headless",
            "--json",
            "--query",
            "d3",
            "--year",
            "2021",
        ]);
        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.query.as_deref(), Some("d3"));
        assert_eq!(args.year.as_deref(), Some("2021"));
        assert_eq!(args.log_level(), "warn");
    }
}
