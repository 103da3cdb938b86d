use crate::domain::Problem;

/// Filters the problemset by difficulty and tags.
///
/// A target rating must match exactly (unrated problems never match one);
/// tags are conjunctive, so a problem must carry every requested tag. Source
/// order is preserved and the result is truncated to `limit` entries.
pub fn filter_problems(
    problems: &[Problem],
    target_rating: Option<i32>,
    required_tags: &[String],
    limit: usize,
) -> Vec<Problem> {
    problems
        .iter()
        .filter(|p| target_rating.is_none_or(|rating| p.rating == Some(rating)))
        .filter(|p| p.has_all_tags(required_tags))
        .take(limit)
        .cloned()
        .collect()
}
