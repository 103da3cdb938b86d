use anyhow::{Context, Result};
use log::info;

use crate::api::CodeforcesClient;
use crate::config::settings::AppConfig;
use crate::domain::{RatingChange, UserInfo};
use crate::stats::{RatingStatsSummary, rating_change_stats};

/// One competitor's side of the comparison.
#[derive(Debug)]
pub struct ComparedUser {
    pub info: UserInfo,
    pub summary: RatingStatsSummary,
}

/// A single contest standing: rank, resulting rating and the delta behind it.
pub struct ContestResult {
    pub rank: i64,
    pub new_rating: i32,
    pub delta: i32,
}

impl ContestResult {
    fn from_event(event: &RatingChange) -> Self {
        Self {
            rank: event.rank,
            new_rating: event.new_rating,
            delta: event.delta(),
        }
    }
}

/// Contest-by-contest comparison row.
///
/// Row n pairs each user's nth rated contest, so the two careers line up
/// from their starts. Contest id and name come from the first user's event;
/// the second column is `None` once the second history runs out.
pub struct ComparisonRow {
    pub contest_id: i64,
    pub contest_name: String,
    pub first: ContestResult,
    pub second: Option<ContestResult>,
}

pub struct ComparisonReport {
    pub first: ComparedUser,
    pub second: ComparedUser,
    pub rows: Vec<ComparisonRow>,
}

pub struct ComparisonService {
    api_client: CodeforcesClient,
}

impl ComparisonService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            api_client: CodeforcesClient::new(&config.api)?,
        })
    }

    pub async fn run(&self, first_handle: &str, second_handle: &str) -> Result<ComparisonReport> {
        info!("=== Comparing {} with {} ===", first_handle, second_handle);

        let (first_info, first_history, second_info, second_history) = tokio::join!(
            self.api_client.user_info(first_handle),
            self.api_client.user_rating(first_handle),
            self.api_client.user_info(second_handle),
            self.api_client.user_rating(second_handle),
        );

        let first_history = first_history?;
        let second_history = second_history?;
        info!(
            "  → {} contests vs {} contests",
            first_history.len(),
            second_history.len()
        );

        Ok(ComparisonReport {
            first: compare_user(first_info?, &first_history)?,
            second: compare_user(second_info?, &second_history)?,
            rows: merge_rows(&first_history, &second_history),
        })
    }
}

fn compare_user(info: UserInfo, history: &[RatingChange]) -> Result<ComparedUser> {
    let summary = rating_change_stats(history)
        .with_context(|| format!("Cannot compare {}", info.handle))?;
    Ok(ComparedUser { info, summary })
}

/// Pairs the two histories by contest ordinal. One row per event of the
/// first user; the second user's surplus events are dropped.
fn merge_rows(first: &[RatingChange], second: &[RatingChange]) -> Vec<ComparisonRow> {
    first
        .iter()
        .enumerate()
        .map(|(ordinal, event)| ComparisonRow {
            contest_id: event.contest_id,
            contest_name: event.contest_name.clone(),
            first: ContestResult::from_event(event),
            second: second.get(ordinal).map(ContestResult::from_event),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(contest_id: i64, rank: i64, old_rating: i32, new_rating: i32) -> RatingChange {
        RatingChange {
            contest_id,
            contest_name: format!("Round {contest_id}"),
            handle: "someone".to_string(),
            rank,
            rating_update_time_seconds: 1_700_000_000 + contest_id,
            old_rating,
            new_rating,
        }
    }

    #[test]
    fn test_rows_pair_histories_by_ordinal() {
        let first = vec![contest(10, 50, 0, 1400), contest(11, 40, 1400, 1460)];
        let second = vec![contest(11, 90, 0, 1350), contest(12, 80, 1350, 1380)];

        let rows = merge_rows(&first, &second);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].contest_id, 10);

        // Row 0 carries the second user's debut even though it was a
        // different contest.
        let debut = rows[0].second.as_ref().unwrap();
        assert_eq!(debut.rank, 90);
        assert_eq!(debut.new_rating, 1350);

        assert_eq!(rows[1].first.delta, 60);
        assert_eq!(rows[1].second.as_ref().unwrap().new_rating, 1380);
    }

    #[test]
    fn test_second_column_ends_with_shorter_history() {
        let first = vec![
            contest(1, 10, 0, 1500),
            contest(2, 12, 1500, 1520),
            contest(3, 9, 1520, 1510),
        ];
        let second = vec![contest(1, 30, 0, 1100)];

        let rows = merge_rows(&first, &second);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].second.is_some());
        assert!(rows[1].second.is_none());
        assert!(rows[2].second.is_none());
    }

    #[test]
    fn test_compare_user_rejects_empty_history() {
        let info = UserInfo {
            handle: "fresh".to_string(),
            rating: None,
            max_rating: None,
            rank: None,
            max_rank: None,
            contribution: 0,
            friend_of_count: 0,
        };

        let error = compare_user(info, &[]).unwrap_err();

        assert!(error.to_string().contains("fresh"));
    }
}
