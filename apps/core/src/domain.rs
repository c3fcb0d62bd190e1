use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Image shown for projects that do not declare one.
pub const FALLBACK_IMAGE: &str = "images/fallback.jpg";

/// Label shown for the bucket of projects without a year.
pub const MISSING_YEAR_LABEL: &str = "(none)";

/// One entry of `projects.json`.
///
/// Every field is optional: a record with missing fields still renders and
/// still takes part in filtering. Fields the site does not know about are kept
/// in `extra` because text search runs over all of a record's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "year_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(title: &str, description: &str, year: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            year: Some(year.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn image_or_fallback(&self) -> &str {
        match self.image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => FALLBACK_IMAGE,
        }
    }

    /// All present field values joined by `\n`, known fields first.
    pub fn searchable_text(&self) -> String {
        let known = [&self.title, &self.description, &self.year, &self.image]
            .into_iter()
            .filter_map(|field| field.as_deref().map(str::to_string));

        let extra = self.extra.values().map(|value| match value {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        });

        known.chain(extra).collect::<Vec<_>>().join("\n")
    }
}

/// A `(year, count)` pair derived from a project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: Option<String>,
    pub count: usize,
}

impl Bucket {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(MISSING_YEAR_LABEL)
    }
}

fn year_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
