use crate::domain::Project;

pub const NO_PROJECTS_MESSAGE: &str = "No projects to display at this time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    H1,
    H2,
    #[default]
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }

    /// Unsupported values fall back to `h3` without complaint.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    pub const fn depth(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

/// What one project looks like once rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub heading: HeadingLevel,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub description: String,
    pub year: Option<String>,
}

impl ProjectCard {
    pub fn from_project(project: &Project, heading: HeadingLevel) -> Self {
        Self {
            heading,
            title: project.title_text().to_string(),
            image: project.image_or_fallback().to_string(),
            alt: project.title_text().to_string(),
            description: project.description_text().to_string(),
            year: project.year.clone(),
        }
    }
}

/// A container cards are rendered into.
pub trait CardSurface {
    fn clear(&mut self);
    fn append_card(&mut self, card: ProjectCard);
    fn show_placeholder(&mut self, message: &str);
}

/// Replaces the container's content with one card per project, or with the
/// empty-state placeholder. A missing container is logged and skipped.
pub fn render_projects<S>(projects: &[&Project], container: Option<&mut S>, heading_level: &str)
where
    S: CardSurface + ?Sized,
{
    let Some(container) = container else {
        log::error!("render_projects: container element not found.");
        return;
    };

    container.clear();

    if projects.is_empty() {
        container.show_placeholder(NO_PROJECTS_MESSAGE);
        return;
    }

    let heading = HeadingLevel::parse_or_default(heading_level);
    for project in projects {
        container.append_card(ProjectCard::from_project(project, heading));
    }
}

/// Cards kept between redraws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardList {
    pub cards: Vec<ProjectCard>,
    pub placeholder: Option<String>,
}

impl CardList {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardSurface for CardList {
    fn clear(&mut self) {
        self.cards.clear();
        self.placeholder = None;
    }

    fn append_card(&mut self, card: ProjectCard) {
        self.cards.push(card);
    }

    fn show_placeholder(&mut self, message: &str) {
        self.placeholder = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FALLBACK_IMAGE;

    #[test]
    fn heading_level_accepts_h1_through_h6() {
        for level in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            assert_eq!(HeadingLevel::parse(level).map(HeadingLevel::as_str), Some(level));
        }
    }

    #[test]
    fn invalid_heading_level_falls_back_to_h3() {
        for level in ["h7", "H2", "div", "", "h0"] {
            assert_eq!(HeadingLevel::parse_or_default(level), HeadingLevel::H3);
        }
    }

    #[test]
    fn renders_one_card_per_project() {
        let projects = [
            Project::new("One", "First", "2020").with_image("images/one.png"),
            Project::new("Two", "Second", "2021"),
        ];
        let refs: Vec<&Project> = projects.iter().collect();
        let mut list = CardList::default();

        render_projects(&refs, Some(&mut list), "h2");

        assert_eq!(list.cards.len(), 2);
        assert!(list.placeholder.is_none());
        assert_eq!(list.cards[0].heading, HeadingLevel::H2);
        assert_eq!(list.cards[0].image, "images/one.png");
        assert_eq!(list.cards[1].image, FALLBACK_IMAGE);
        assert_eq!(list.cards[1].alt, "Two");
    }

    #[test]
    fn missing_description_renders_empty_paragraph() {
        let project = Project {
            title: Some("Untold".to_string()),
            ..Project::default()
        };
        let mut list = CardList::default();
        render_projects(&[&project], Some(&mut list), "h3");
        assert_eq!(list.cards[0].description, "");
        assert_eq!(list.cards[0].image, FALLBACK_IMAGE);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut list = CardList::default();
        list.append_card(ProjectCard::from_project(
            &Project::new("Stale", "", "2019"),
            HeadingLevel::H3,
        ));

        render_projects(&[], Some(&mut list), "h2");

        assert!(list.is_empty());
        assert_eq!(list.placeholder.as_deref(), Some(NO_PROJECTS_MESSAGE));
    }

    #[test]
    fn missing_container_is_a_no_op() {
        let project = Project::new("Ghost", "", "2020");
        render_projects::<CardList>(&[&project], None, "h2");
    }
}
