pub mod bookmarks;

pub use bookmarks::{BookmarkRepository, BookmarkStore, JsonFileRepository, ToggleOutcome};
