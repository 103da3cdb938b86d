use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verdict string the judge assigns to accepted submissions.
pub const ACCEPTED_VERDICT: &str = "OK";

const PROBLEM_URL_BASE: &str = "https://codeforces.com/problemset/problem";

/// Public profile data from `user.info`.
///
/// Rating fields are absent for accounts that never took part in a rated
/// contest, so they stay optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub handle: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub max_rating: Option<i32>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub max_rank: Option<String>,
    #[serde(default)]
    pub contribution: i32,
    #[serde(default)]
    pub friend_of_count: i32,
}

/// One rated-contest entry from `user.rating`.
///
/// The API returns these in chronological order; the aggregation code relies
/// on that ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: i64,
    pub contest_name: String,
    pub handle: String,
    pub rank: i64,
    pub rating_update_time_seconds: i64,
    pub old_rating: i32,
    pub new_rating: i32,
}

impl RatingChange {
    /// Rating delta produced by this contest.
    pub fn delta(&self) -> i32 {
        self.new_rating - self.old_rating
    }

    pub fn update_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.rating_update_time_seconds, 0)
    }
}

/// A problemset entry, nested in submissions and in `problemset.problems`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Missing for some gym/acmsguru problems.
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub index: String,
    pub name: String,
    /// Unset until Codeforces assigns a difficulty.
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    pub fn key(&self) -> ProblemKey {
        ProblemKey {
            contest_id: self.contest_id,
            index: self.index.clone(),
        }
    }

    /// True when every tag in `required` appears in this problem's tag list.
    pub fn has_all_tags(&self, required: &[String]) -> bool {
        required.iter().all(|tag| self.tags.iter().any(|t| t == tag))
    }

    /// Link to the problem statement, when the contest id is known.
    pub fn url(&self) -> Option<String> {
        self.contest_id
            .map(|id| format!("{}/{}/{}", PROBLEM_URL_BASE, id, self.index))
    }
}

/// Identity of a problem: contest id plus index letter.
///
/// A missing contest id still keys consistently, so resubmissions of such a
/// problem deduplicate the same way regular ones do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemKey {
    pub contest_id: Option<i64>,
    pub index: String,
}

/// One judge submission from `user.status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub creation_time_seconds: i64,
    pub problem: Problem,
    /// Absent while the submission is still in the judging queue.
    #[serde(default)]
    pub verdict: Option<String>,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(ACCEPTED_VERDICT)
    }
}

/// Result payload of `problemset.problems`.
///
/// The API also sends `problemStatistics`; nothing here consumes it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemsetPayload {
    pub problems: Vec<Problem>,
}

/// Locally persisted problem bookmark, unique by `(contest_id, index)`.
///
/// Serialized with the same camelCase field names the API uses, so stored
/// documents look like the problem records they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub contest_id: i64,
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Bookmark {
    /// Builds a bookmark from a problemset entry.
    ///
    /// Returns `None` when the problem has no contest id; such entries have
    /// no stable identity to toggle against later.
    pub fn from_problem(problem: &Problem) -> Option<Self> {
        let contest_id = problem.contest_id?;
        Some(Self {
            contest_id,
            index: problem.index.clone(),
            name: problem.name.clone(),
            rating: problem.rating,
            tags: problem.tags.clone(),
        })
    }

    pub fn matches(&self, contest_id: i64, index: &str) -> bool {
        self.contest_id == contest_id && self.index == index
    }

    pub fn url(&self) -> String {
        format!("{}/{}/{}", PROBLEM_URL_BASE, self.contest_id, self.index)
    }
}
