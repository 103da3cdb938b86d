pub mod history;
pub mod problems;
pub mod rank;
pub mod submissions;
pub mod types;

pub use history::{rating_change_stats, recent_contests};
pub use problems::filter_problems;
pub use rank::rank_title;
pub use submissions::{rating_histogram, solved_problem_keys, tag_histogram};
pub use types::{RatingStatsSummary, TagCount};
