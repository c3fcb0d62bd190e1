use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use portfolio_core::{Project, ProjectsPage};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::{handle_key_event, handle_mouse_event, App};
use crate::ui;
use portfolio_core::profile::ProfileStats;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut stats_rx: mpsc::Receiver<Option<ProfileStats>>,
) -> Result<()> {
    while app.running {
        if app.stats_pending {
            match stats_rx.try_recv() {
                Ok(stats) => app.apply_stats(stats),
                Err(mpsc::error::TryRecvError::Disconnected) => app.apply_stats(None),
                Err(mpsc::error::TryRecvError::Empty) => {}
            }
        }

        app.update();

        let mut area = Rect::default();
        if let Err(e) = terminal.draw(|f| {
            area = f.area();
            ui::ui(app, f);
        }) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            tokio::task::yield_now().await;
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_key_event(app, key);
            }
            Ok(Event::Mouse(mouse)) => handle_mouse_event(app, mouse, area),
            Ok(_) => {}
            Err(e) => log::warn!("failed to read terminal event: {e}"),
        }
    }
    Ok(())
}

/// Prints the filtered project list without starting the UI.
pub fn run_headless(
    projects: Vec<Project>,
    heading: &str,
    query: Option<&str>,
    year: Option<&str>,
    json: bool,
) -> Result<()> {
    let summary = HeadlessSummary::build(projects, heading, query, year);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.to_text());
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct HeadlessSummary {
    total: usize,
    query: String,
    year: Option<String>,
    visible: usize,
    buckets: Vec<(String, usize)>,
    projects: Vec<HeadlessProject>,
}

#[derive(Debug, Serialize)]
struct HeadlessProject {
    title: String,
    year: Option<String>,
    image: String,
}

impl HeadlessSummary {
    fn build(projects: Vec<Project>, heading: &str, query: Option<&str>, year: Option<&str>) -> Self {
        let total = projects.len();
        let mut page = ProjectsPage::new(projects, heading);
        if let Some(query) = query {
            page.set_query(query);
        }
        if let Some(year) = year {
            if page.select_year(year).is_none() {
                log::warn!("no projects from {year}");
            }
        }

        let projects: Vec<HeadlessProject> = page
            .visible()
            .into_iter()
            .map(|project| HeadlessProject {
                title: project.title_text().to_string(),
                year: project.year.clone(),
                image: project.image_or_fallback().to_string(),
            })
            .collect();

        Self {
            total,
            query: page.query().to_string(),
            year: page
                .selected_bucket()
                .map(|bucket| bucket.display_label().to_string()),
            visible: projects.len(),
            buckets: page
                .buckets()
                .iter()
                .map(|bucket| (bucket.display_label().to_string(), bucket.count))
                .collect(),
            projects,
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nProjects ({})\n", self.total));
        out.push_str("=============\n");
        if !self.query.is_empty() {
            out.push_str(&format!("Query: {}\n", self.query));
        }
        if let Some(year) = &self.year {
            out.push_str(&format!("Year: {year}\n"));
        }

        out.push_str("\nBy year:\n");
        for (label, count) in &self.buckets {
            out.push_str(&format!("- {label}: {count}\n"));
        }

        out.push_str(&format!("\nShowing {}:\n", self.visible));
        if self.projects.is_empty() {
            out.push_str(&format!("{}\n", portfolio_core::render::NO_PROJECTS_MESSAGE));
        }
        for project in &self.projects {
            let year = project.year.as_deref().unwrap_or("(none)");
            out.push_str(&format!("- {} | {year}\n", project.title));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<Project> {
        vec![
            Project::new("Weather Station", "Sensors", "2020"),
            Project::new("Portfolio", "Static site", "2021"),
            Project::new("Budget App", "Spending", "2020"),
        ]
    }

    #[test]
    fn summary_applies_query_then_year() {
        let summary = HeadlessSummary::build(projects(), "h2", Some("a"), Some("2020"));
        assert_eq!(summary.total, 3);
        assert_eq!(summary.year.as_deref(), Some("2020"));
        let titles: Vec<&str> = summary.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Weather Station", "Budget App"]);
    }

    #[test]
    fn unknown_year_keeps_everything_visible() {
        let summary = HeadlessSummary::build(projects(), "h2", None, Some("1999"));
        assert_eq!(summary.year, None);
        assert_eq!(summary.visible, 3);
        assert_eq!(
            summary.buckets,
            vec![("2020".to_string(), 2), ("2021".to_string(), 1)]
        );
    }

    #[test]
    fn text_summary_shows_placeholder_when_nothing_matches() {
        let summary = HeadlessSummary::build(projects(), "h2", Some("zzz"), None);
        let text = summary.to_text();
        assert!(text.contains("Showing 0:"));
        assert!(text.contains("No projects to display at this time."));
    }

    #[test]
    fn json_summary_lists_buckets_as_pairs() {
        let summary = HeadlessSummary::build(projects(), "h2", None, None);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["buckets"][0], serde_json::json!(["2020", 2]));
        assert_eq!(value["projects"][0]["image"], "images/fallback.jpg");
    }
}
