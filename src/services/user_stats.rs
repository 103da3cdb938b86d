use std::collections::BTreeMap;

use anyhow::Result;
use log::info;

use crate::api::CodeforcesClient;
use crate::config::settings::AppConfig;
use crate::domain::{RatingChange, Submission, UserInfo};
use crate::stats::{
    RatingStatsSummary, TagCount, rating_change_stats, rating_histogram, recent_contests,
    solved_problem_keys, tag_histogram,
};

/// Everything the stats view needs about one user.
pub struct UserStatsReport {
    pub info: UserInfo,
    pub total_submissions: usize,
    pub solved_count: usize,
    pub tag_counts: Vec<TagCount>,
    pub rating_counts: BTreeMap<i32, usize>,
    /// `None` for accounts that never entered a rated contest.
    pub contest_summary: Option<RatingStatsSummary>,
    /// Latest contests, newest first.
    pub recent_contests: Vec<RatingChange>,
}

pub struct UserStatsService {
    api_client: CodeforcesClient,
    recent_window: usize,
}

impl UserStatsService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            api_client: CodeforcesClient::new(&config.api)?,
            recent_window: config.browse.recent_contests,
        })
    }

    pub async fn run(&self, handle: &str) -> Result<UserStatsReport> {
        info!("=== Building stats report for {} ===", handle);

        let (info, history, submissions) = self.fetch_user_data(handle).await?;
        info!(
            "  → {} rated contests, {} submissions",
            history.len(),
            submissions.len()
        );

        build_report(self.recent_window, info, history, submissions)
    }

    async fn fetch_user_data(
        &self,
        handle: &str,
    ) -> Result<(UserInfo, Vec<RatingChange>, Vec<Submission>)> {
        let (info, history, submissions) = tokio::join!(
            self.api_client.user_info(handle),
            self.api_client.user_rating(handle),
            self.api_client.user_status(handle),
        );

        Ok((info?, history?, submissions?))
    }
}

fn build_report(
    recent_window: usize,
    info: UserInfo,
    history: Vec<RatingChange>,
    submissions: Vec<Submission>,
) -> Result<UserStatsReport> {
    let contest_summary = if history.is_empty() {
        None
    } else {
        Some(rating_change_stats(&history)?)
    };

    Ok(UserStatsReport {
        info,
        total_submissions: submissions.len(),
        solved_count: solved_problem_keys(&submissions).len(),
        tag_counts: tag_histogram(&submissions),
        rating_counts: rating_histogram(&submissions),
        contest_summary,
        recent_contests: recent_contests(&history, recent_window),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Problem;

    fn user(handle: &str) -> UserInfo {
        UserInfo {
            handle: handle.to_string(),
            rating: Some(1543),
            max_rating: Some(1602),
            rank: Some("specialist".to_string()),
            max_rank: Some("expert".to_string()),
            contribution: 0,
            friend_of_count: 12,
        }
    }

    fn contest(contest_id: i64, old_rating: i32, new_rating: i32) -> RatingChange {
        RatingChange {
            contest_id,
            contest_name: format!("Round {contest_id}"),
            handle: "someone".to_string(),
            rank: 100,
            rating_update_time_seconds: 1_700_000_000 + contest_id,
            old_rating,
            new_rating,
        }
    }

    fn accepted(contest_id: i64, index: &str, tags: &[&str]) -> Submission {
        Submission {
            id: contest_id * 100,
            creation_time_seconds: 1_700_000_000,
            problem: Problem {
                contest_id: Some(contest_id),
                index: index.to_string(),
                name: format!("Problem {index}"),
                rating: Some(900),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
            verdict: Some("OK".to_string()),
        }
    }

    #[test]
    fn test_report_covers_every_section() {
        let history = vec![contest(1, 0, 1400), contest(2, 1400, 1450)];
        let submissions = vec![
            accepted(1, "A", &["math"]),
            accepted(1, "B", &["dp", "math"]),
        ];

        let report = build_report(5, user("someone"), history, submissions).unwrap();

        assert_eq!(report.total_submissions, 2);
        assert_eq!(report.solved_count, 2);
        assert_eq!(report.tag_counts[0].name, "math");
        assert_eq!(report.tag_counts[0].value, 2);
        assert_eq!(report.rating_counts.get(&900), Some(&2));
        assert_eq!(report.contest_summary.unwrap().total_contests, 2);
        assert_eq!(report.recent_contests[0].contest_id, 2);
    }

    #[test]
    fn test_unrated_account_has_no_contest_summary() {
        let report = build_report(5, user("fresh"), vec![], vec![]).unwrap();

        assert!(report.contest_summary.is_none());
        assert!(report.recent_contests.is_empty());
        assert_eq!(report.solved_count, 0);
    }

    #[test]
    fn test_recent_contests_respect_window() {
        let history: Vec<RatingChange> =
            (1..=8).map(|id| contest(id, 1000, 1000)).collect();

        let report = build_report(5, user("regular"), history, vec![]).unwrap();

        let ids: Vec<i64> = report
            .recent_contests
            .iter()
            .map(|c| c.contest_id)
            .collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4]);
    }
}
