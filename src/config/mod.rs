pub mod settings;
pub mod tags;

pub use settings::AppConfig;
pub use tags::{PROBLEM_TAGS, is_known_tag};
