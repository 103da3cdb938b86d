pub mod comparison;
pub mod problem_browser;
pub mod user_stats;

pub use comparison::{ComparisonReport, ComparisonService};
pub use problem_browser::{BookmarkToggleReport, ProblemBrowseReport, ProblemBrowserService};
pub use user_stats::{UserStatsReport, UserStatsService};
