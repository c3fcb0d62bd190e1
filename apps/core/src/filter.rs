use crate::domain::{Bucket, Project};

/// Case-insensitive substring match against every field of the record.
pub fn matches_query(project: &Project, query: &str) -> bool {
    contains_lowercase(project, &query.to_lowercase())
}

/// True when nothing is selected, otherwise the record's year must equal the
/// selected bucket's label. An index past the end never matches.
pub fn matches_year(project: &Project, buckets: &[Bucket], selected: Option<usize>) -> bool {
    selected.map_or(true, |index| {
        buckets
            .get(index)
            .is_some_and(|bucket| bucket.label == project.year)
    })
}

/// Projects passing both the text query and the year selection, in source order.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    query: &str,
    buckets: &[Bucket],
    selected: Option<usize>,
) -> Vec<&'a Project> {
    let query = query.to_lowercase();
    projects
        .iter()
        .filter(|project| {
            contains_lowercase(project, &query) && matches_year(project, buckets, selected)
        })
        .collect()
}

fn contains_lowercase(project: &Project, lowered_query: &str) -> bool {
    lowered_query.is_empty()
        || project
            .searchable_text()
            .to_lowercase()
            .contains(lowered_query)
}
