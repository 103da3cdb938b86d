use anyhow::{Result, bail};

use crate::domain::RatingChange;

use super::types::RatingStatsSummary;

/// Summarizes a chronological rating history.
///
/// The first event only establishes the baseline: it counts toward
/// `total_contests` but never toward the increase/decrease tally. The
/// average rank is rounded half away from zero; ranks are positive, so this
/// is plain nearest-integer rounding.
///
/// Fails on an empty history; callers check for rated contests first.
pub fn rating_change_stats(history: &[RatingChange]) -> Result<RatingStatsSummary> {
    if history.is_empty() {
        bail!("rating history is empty");
    }

    let mut increased = 0;
    let mut decreased = 0;
    let mut unchanged = 0;

    for event in &history[1..] {
        let delta = event.delta();
        if delta > 0 {
            increased += 1;
        } else if delta < 0 {
            decreased += 1;
        } else {
            unchanged += 1;
        }
    }

    let mut max_rating = history[0].new_rating;
    let mut rank_sum: i64 = 0;
    for event in history {
        max_rating = max_rating.max(event.new_rating);
        rank_sum += event.rank;
    }
    let average_rank = (rank_sum as f64 / history.len() as f64).round() as i64;

    Ok(RatingStatsSummary {
        increased,
        decreased,
        unchanged,
        total_contests: history.len(),
        max_rating,
        average_rank,
    })
}

/// Most recent contests, newest first.
pub fn recent_contests(history: &[RatingChange], window: usize) -> Vec<RatingChange> {
    history.iter().rev().take(window).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(contest_id: i64, old_rating: i32, new_rating: i32, rank: i64) -> RatingChange {
        RatingChange {
            contest_id,
            contest_name: format!("Round {contest_id}"),
            handle: "someone".to_string(),
            rank,
            rating_update_time_seconds: 1_600_000_000 + contest_id,
            old_rating,
            new_rating,
        }
    }

    #[test]
    fn test_stats_on_single_event() {
        let history = vec![event(1, 0, 742, 1534)];

        let summary = rating_change_stats(&history).unwrap();

        assert_eq!(summary.increased, 0);
        assert_eq!(summary.decreased, 0);
        assert_eq!(summary.unchanged, 0);
        assert_eq!(summary.total_contests, 1);
        assert_eq!(summary.max_rating, 742);
        assert_eq!(summary.average_rank, 1534);
    }

    #[test]
    fn test_first_event_excluded_from_delta_tally() {
        let history = vec![event(1, 1000, 1100, 50), event(2, 1100, 1050, 80)];

        let summary = rating_change_stats(&history).unwrap();

        assert_eq!(summary.increased, 0);
        assert_eq!(summary.decreased, 1);
        assert_eq!(summary.unchanged, 0);
        assert_eq!(summary.total_contests, 2);
        assert_eq!(summary.max_rating, 1100);
        assert_eq!(summary.average_rank, 65);
    }

    #[test]
    fn test_unchanged_deltas_are_counted() {
        let history = vec![
            event(1, 1200, 1250, 10),
            event(2, 1250, 1250, 20),
            event(3, 1250, 1300, 30),
        ];

        let summary = rating_change_stats(&history).unwrap();

        assert_eq!(summary.increased, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.decreased, 0);
    }

    #[test]
    fn test_average_rank_rounds_half_away_from_zero() {
        let history = vec![event(1, 0, 800, 50), event(2, 800, 850, 81)];

        let summary = rating_change_stats(&history).unwrap();

        // mean 65.5 rounds up to 66
        assert_eq!(summary.average_rank, 66);
    }

    #[test]
    fn test_empty_history_fails() {
        assert!(rating_change_stats(&[]).is_err());
    }

    #[test]
    fn test_recent_contests_newest_first() {
        let history: Vec<RatingChange> =
            (1..=7).map(|i| event(i, 1000, 1000 + i as i32, i)).collect();

        let recent = recent_contests(&history, 5);

        let ids: Vec<i64> = recent.iter().map(|e| e.contest_id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_recent_contests_window_larger_than_history() {
        let history = vec![event(1, 0, 900, 12)];

        assert_eq!(recent_contests(&history, 5).len(), 1);
    }
}
