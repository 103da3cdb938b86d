use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::{ProblemKey, Submission};

use super::types::TagCount;

/// Tag distribution over accepted submissions.
///
/// Every accepted submission increments each of its tags, so re-solving a
/// problem counts again. Output holds one entry per distinct tag, sorted by
/// descending count with ties broken alphabetically.
pub fn tag_histogram(submissions: &[Submission]) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for submission in submissions.iter().filter(|s| s.is_accepted()) {
        for tag in &submission.problem.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut histogram: Vec<TagCount> = counts
        .into_iter()
        .map(|(name, value)| TagCount {
            name: name.to_string(),
            value,
        })
        .collect();

    histogram.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    histogram
}

/// Solved problems per difficulty rating.
///
/// Each distinct problem counts once regardless of how many accepted
/// submissions it has; problems without an assigned rating are skipped.
/// The result is independent of submission order.
pub fn rating_histogram(submissions: &[Submission]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    let mut seen: HashSet<ProblemKey> = HashSet::new();

    for submission in submissions.iter().filter(|s| s.is_accepted()) {
        let Some(rating) = submission.problem.rating else {
            continue;
        };
        if seen.insert(submission.problem.key()) {
            *counts.entry(rating).or_insert(0) += 1;
        }
    }

    counts
}

/// Distinct accepted problem keys, used to mark problems as solved.
pub fn solved_problem_keys(submissions: &[Submission]) -> HashSet<ProblemKey> {
    submissions
        .iter()
        .filter(|s| s.is_accepted())
        .map(|s| s.problem.key())
        .collect()
}
