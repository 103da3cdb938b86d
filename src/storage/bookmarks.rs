use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::domain::Bookmark;

/// What a toggle did to the bookmark list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Toggles a bookmark in place.
///
/// Removes the entry matching the bookmark's `(contest_id, index)` key if
/// present, otherwise appends to the end. Name, rating and tags take no part
/// in matching, so toggling twice always restores the original set.
pub fn toggle(bookmarks: &mut Vec<Bookmark>, bookmark: Bookmark) -> ToggleOutcome {
    let before = bookmarks.len();
    bookmarks.retain(|b| !b.matches(bookmark.contest_id, &bookmark.index));

    if bookmarks.len() < before {
        ToggleOutcome::Removed
    } else {
        bookmarks.push(bookmark);
        ToggleOutcome::Added
    }
}

/// Persistence port for the bookmark list.
///
/// The whole document is rewritten after every mutation; there is no
/// incremental update.
pub trait BookmarkRepository {
    fn load(&self) -> Result<Vec<Bookmark>>;
    fn save(&self, bookmarks: &[Bookmark]) -> Result<()>;
}

/// Bookmark list persisted as a single pretty-printed JSON document.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl BookmarkRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Bookmark>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read bookmark file {}", self.path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse bookmark file {}", self.path.display()))
    }

    fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create bookmark directory")?;
            }
        }

        let json =
            serde_json::to_string_pretty(bookmarks).context("Failed to serialize bookmarks")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write bookmark file {}", self.path.display()))?;

        info!(
            "Saved {} bookmarks to {}",
            bookmarks.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory bookmark list bound to a repository.
///
/// Loads once on open and writes the full list back after every toggle.
pub struct BookmarkStore<R: BookmarkRepository> {
    repository: R,
    entries: Vec<Bookmark>,
}

impl<R: BookmarkRepository> BookmarkStore<R> {
    pub fn open(repository: R) -> Result<Self> {
        let entries = repository.load()?;
        Ok(Self {
            repository,
            entries,
        })
    }

    pub fn entries(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn contains(&self, contest_id: i64, index: &str) -> bool {
        self.entries.iter().any(|b| b.matches(contest_id, index))
    }

    /// Toggles the bookmark and persists the updated list.
    pub fn toggle(&mut self, bookmark: Bookmark) -> Result<ToggleOutcome> {
        let outcome = toggle(&mut self.entries, bookmark);
        self.repository.save(&self.entries)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(contest_id: i64, index: &str, name: &str) -> Bookmark {
        Bookmark {
            contest_id,
            index: index.to_string(),
            name: name.to_string(),
            rating: Some(1200),
            tags: vec!["dp".to_string()],
        }
    }

    fn temp_repository(name: &str) -> JsonFileRepository {
        let path = std::env::temp_dir()
            .join("cf_stats_tests")
            .join(format!("{name}.json"));
        let _ = fs::remove_file(&path);
        JsonFileRepository::new(path)
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut bookmarks = vec![bookmark(1, "A", "First")];

        let added = toggle(&mut bookmarks, bookmark(2, "B", "Second"));
        let removed = toggle(&mut bookmarks, bookmark(2, "B", "Second"));

        assert_eq!(added, ToggleOutcome::Added);
        assert_eq!(removed, ToggleOutcome::Removed);
        assert_eq!(bookmarks, vec![bookmark(1, "A", "First")]);
    }

    #[test]
    fn test_toggle_matches_on_key_only() {
        let mut bookmarks = vec![bookmark(1, "A", "Original name")];

        let outcome = toggle(&mut bookmarks, bookmark(1, "A", "Renamed"));

        assert_eq!(outcome, ToggleOutcome::Removed);
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let repository = temp_repository("missing_file");

        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn test_repository_roundtrip() {
        let repository = temp_repository("roundtrip");
        let bookmarks = vec![bookmark(1700, "A", "Two Divisors")];

        repository.save(&bookmarks).unwrap();
        let loaded = repository.load().unwrap();

        assert_eq!(loaded, bookmarks);
    }

    #[test]
    fn test_store_persists_each_toggle() {
        let path = std::env::temp_dir()
            .join("cf_stats_tests")
            .join("store_persists.json");
        let _ = fs::remove_file(&path);

        let mut store = BookmarkStore::open(JsonFileRepository::new(&path)).unwrap();
        store
            .toggle(bookmark(1927, "C", "Choose the Different Ones!"))
            .unwrap();

        let reopened = BookmarkStore::open(JsonFileRepository::new(&path)).unwrap();

        assert!(reopened.contains(1927, "C"));
        assert_eq!(reopened.entries().len(), 1);
    }
}
