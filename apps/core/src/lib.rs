//! Shared model and behaviour of the portfolio site: project records, the
//! query and year filter, the year pie chart, and the small page features
//! (navigation, theme, contact form, profile stats) both front ends reuse.

pub mod chart;
pub mod config;
pub mod contact;
pub mod domain;
pub mod error;
pub mod filter;
pub mod grid;
pub mod loader;
pub mod nav;
pub mod page;
pub mod profile;
pub mod render;
pub mod site;
pub mod theme;

pub use chart::{ChartModel, ChartSurface, Rgb};
pub use config::SiteConfig;
pub use domain::{Bucket, Project};
pub use error::{Error, Result};
pub use page::ProjectsPage;
pub use render::{CardList, CardSurface, HeadingLevel, ProjectCard};
pub use site::{Command, Focus, Key, Screen, Site};
pub use theme::{ColorScheme, PreferenceStore};
