use portfolio_core::chart::{rollup_by_year, LegendEntry, PieSlice};
use portfolio_core::domain::FALLBACK_IMAGE;
use portfolio_core::loader::parse_projects;
use portfolio_core::render::NO_PROJECTS_MESSAGE;
use portfolio_core::{ChartSurface, CardSurface, ProjectCard, ProjectsPage, Rgb};

#[derive(Default)]
struct RecordingCards {
    calls: Vec<String>,
    cards: Vec<ProjectCard>,
}

impl CardSurface for RecordingCards {
    fn clear(&mut self) {
        self.calls.push("clear".to_string());
        self.cards.clear();
    }

    fn append_card(&mut self, card: ProjectCard) {
        self.calls.push(format!("card {}", card.title));
        self.cards.push(card);
    }

    fn show_placeholder(&mut self, message: &str) {
        self.calls.push(format!("placeholder {message}"));
    }
}

#[derive(Default)]
struct RecordingChart {
    slices: Vec<(PieSlice, Rgb)>,
    legend: Vec<LegendEntry>,
    selected: Option<usize>,
    clears: usize,
    marks: usize,
}

impl ChartSurface for RecordingChart {
    fn clear(&mut self) {
        self.clears += 1;
        self.slices.clear();
        self.legend.clear();
    }

    fn draw_slice(&mut self, slice: &PieSlice, color: Rgb) {
        self.slices.push((slice.clone(), color));
    }

    fn draw_legend_entry(&mut self, entry: &LegendEntry) {
        self.legend.push(entry.clone());
    }

    fn mark_selected(&mut self, selected: Option<usize>) {
        self.marks += 1;
        self.selected = selected;
    }
}

const PROJECTS_JSON: &str = r#"[
    {"title": "Weather Station", "year": "2020", "image": "images/weather.png",
     "description": "Arduino sensors streaming to a dashboard"},
    {"title": "Portfolio", "year": "2021", "description": "Static site with a D3 pie chart"},
    {"title": "Budget App", "year": "2020"},
    {"title": "Chess Engine", "year": "2022", "description": "Alpha-beta search"}
]"#;

fn page() -> ProjectsPage {
    ProjectsPage::new(parse_projects(PROJECTS_JSON).unwrap(), "h2")
}

#[test]
fn initial_render_draws_cards_and_chart() {
    let page = page();
    let mut cards = RecordingCards::default();
    let mut chart = RecordingChart::default();

    page.render(Some(&mut cards), &mut chart);

    assert_eq!(cards.calls[0], "clear");
    assert_eq!(cards.cards.len(), 4);
    assert_eq!(chart.clears, 1);
    assert_eq!(chart.slices.len(), 3);
    let legend: Vec<(&str, usize)> = chart
        .legend
        .iter()
        .map(|entry| (entry.label.as_str(), entry.count))
        .collect();
    assert_eq!(legend, [("2020", 2), ("2021", 1), ("2022", 1)]);
    assert_eq!(chart.selected, None);
}

#[test]
fn missing_image_and_description_render_with_defaults() {
    let page = page();
    let mut cards = RecordingCards::default();
    page.render_cards(Some(&mut cards));

    let budget = &cards.cards[2];
    assert_eq!(budget.title, "Budget App");
    assert_eq!(budget.image, FALLBACK_IMAGE);
    assert_eq!(budget.description, "");
    assert_eq!(cards.cards[0].image, "images/weather.png");
}

#[test]
fn bucket_click_redraws_cards_without_reaggregating() {
    let mut page = page();
    let mut cards = RecordingCards::default();
    let mut chart = RecordingChart::default();
    page.render(Some(&mut cards), &mut chart);

    page.on_bucket_click(0, Some(&mut cards), &mut chart);

    assert_eq!(chart.clears, 1, "chart must not be rebuilt on click");
    assert_eq!(chart.selected, Some(0));
    let titles: Vec<&str> = cards.cards.iter().map(|card| card.title.as_str()).collect();
    assert_eq!(titles, ["Weather Station", "Budget App"]);
}

#[test]
fn clicking_same_legend_entry_twice_restores_query_results() {
    let mut page = page();
    let mut cards = RecordingCards::default();
    let mut chart = RecordingChart::default();
    page.on_query_input("a", Some(&mut cards), &mut chart);
    let query_only: Vec<String> = cards.cards.iter().map(|card| card.title.clone()).collect();

    page.on_bucket_click(1, Some(&mut cards), &mut chart);
    page.on_bucket_click(1, Some(&mut cards), &mut chart);

    assert_eq!(page.selected(), None);
    assert_eq!(chart.selected, None);
    let now: Vec<String> = cards.cards.iter().map(|card| card.title.clone()).collect();
    assert_eq!(now, query_only);
}

#[test]
fn query_input_rebuilds_chart_and_resets_selection() {
    let mut page = page();
    let mut cards = RecordingCards::default();
    let mut chart = RecordingChart::default();
    page.render(Some(&mut cards), &mut chart);
    page.on_bucket_click(2, Some(&mut cards), &mut chart);

    page.on_query_input("sensors", Some(&mut cards), &mut chart);

    assert_eq!(chart.clears, 2);
    assert_eq!(chart.selected, None);
    assert_eq!(chart.legend.len(), 1);
    assert_eq!(cards.cards.len(), 1);
}

#[test]
fn nonexistent_term_shows_placeholder() {
    let mut page = page();
    let mut cards = RecordingCards::default();
    let mut chart = RecordingChart::default();

    page.on_query_input("nonexistent-term", Some(&mut cards), &mut chart);

    assert!(page.visible().is_empty());
    assert_eq!(
        cards.calls.last().map(String::as_str),
        Some(format!("placeholder {NO_PROJECTS_MESSAGE}").as_str())
    );
    assert!(chart.slices.is_empty());
}

#[test]
fn bucket_counts_cover_every_project() {
    let projects = parse_projects(PROJECTS_JSON).unwrap();
    let total: usize = rollup_by_year(&projects).iter().map(|bucket| bucket.count).sum();
    assert_eq!(total, projects.len());
}

#[test]
fn missing_container_leaves_chart_working() {
    let page = page();
    let mut chart = RecordingChart::default();
    page.render::<RecordingCards, _>(None, &mut chart);
    assert_eq!(chart.legend.len(), 3);
}
