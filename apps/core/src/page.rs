use crate::chart::{draw_chart, rollup_by_year, ChartSurface};
use crate::domain::{Bucket, Project};
use crate::filter::{filter_projects, matches_query};
use crate::render::{render_projects, CardSurface};

/// State behind the projects page: the loaded records, the search query, the
/// buckets currently on the chart and the selected bucket.
#[derive(Debug, Clone, Default)]
pub struct ProjectsPage {
    projects: Vec<Project>,
    query: String,
    buckets: Vec<Bucket>,
    selected: Option<usize>,
    heading: String,
}

impl ProjectsPage {
    pub fn new(projects: Vec<Project>, heading: &str) -> Self {
        let buckets = rollup_by_year(&projects);
        Self {
            projects,
            query: String::new(),
            buckets,
            selected: None,
            heading: heading.to_string(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_bucket(&self) -> Option<&Bucket> {
        self.selected.and_then(|index| self.buckets.get(index))
    }

    /// Page title with the loaded project count appended.
    pub fn title(&self, base: &str) -> String {
        if self.projects.is_empty() {
            base.to_string()
        } else {
            format!("{base} ({})", self.projects.len())
        }
    }

    pub fn visible(&self) -> Vec<&Project> {
        filter_projects(&self.projects, &self.query, &self.buckets, self.selected)
    }

    /// Replaces the query. The selection is dropped and the buckets are
    /// rebuilt from the projects that match the new query.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.selected = None;
        self.buckets = rollup_by_year(
            self.projects
                .iter()
                .filter(|project| matches_query(project, &self.query)),
        );
    }

    /// Selects the bucket at `index`, or clears the selection when it is
    /// already selected. Indices past the current buckets are ignored.
    pub fn toggle_bucket(&mut self, index: usize) -> Option<usize> {
        if index >= self.buckets.len() {
            log::debug!(
                "ignoring click on bucket {index}, only {} drawn",
                self.buckets.len()
            );
            return self.selected;
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        self.selected
    }

    pub fn select_year(&mut self, year: &str) -> Option<usize> {
        let index = self
            .buckets
            .iter()
            .position(|bucket| bucket.label.as_deref() == Some(year))?;
        self.selected = Some(index);
        self.selected
    }

    pub fn render_cards<S>(&self, container: Option<&mut S>)
    where
        S: CardSurface + ?Sized,
    {
        render_projects(&self.visible(), container, &self.heading);
    }

    pub fn render_chart<S>(&self, surface: &mut S)
    where
        S: ChartSurface + ?Sized,
    {
        draw_chart(surface, &self.buckets, self.selected);
    }

    /// Initial draw of both the cards and the chart.
    pub fn render<C, H>(&self, cards: Option<&mut C>, chart: &mut H)
    where
        C: CardSurface + ?Sized,
        H: ChartSurface + ?Sized,
    {
        self.render_cards(cards);
        self.render_chart(chart);
    }

    /// Search box input: new query, fresh buckets, full redraw.
    pub fn on_query_input<C, H>(&mut self, query: &str, cards: Option<&mut C>, chart: &mut H)
    where
        C: CardSurface + ?Sized,
        H: ChartSurface + ?Sized,
    {
        self.set_query(query);
        self.render(cards, chart);
    }

    /// Slice or legend click: toggles the selection, moves the highlight and
    /// redraws the cards. The buckets are left alone.
    pub fn on_bucket_click<C, H>(&mut self, index: usize, cards: Option<&mut C>, chart: &mut H)
    where
        C: CardSurface + ?Sized,
        H: ChartSurface + ?Sized,
    {
        let selected = self.toggle_bucket(index);
        chart.mark_selected(selected);
        self.render_cards(cards);
    }
}
