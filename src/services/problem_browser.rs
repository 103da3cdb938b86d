use std::collections::HashSet;

use anyhow::{Context, Result};
use log::info;

use crate::api::CodeforcesClient;
use crate::config::settings::AppConfig;
use crate::domain::{Bookmark, Problem, ProblemKey};
use crate::stats::{filter_problems, solved_problem_keys};
use crate::storage::{BookmarkRepository, BookmarkStore, ToggleOutcome};

/// A catalog problem decorated with per-user flags.
pub struct ProblemEntry {
    pub problem: Problem,
    pub solved: bool,
    pub bookmarked: bool,
}

pub struct ProblemBrowseReport {
    pub entries: Vec<ProblemEntry>,
}

pub struct BookmarkToggleReport {
    pub outcome: ToggleOutcome,
    pub bookmark: Bookmark,
}

/// Browses the problemset catalog and manages bookmarks on top of it.
pub struct ProblemBrowserService<R: BookmarkRepository> {
    api_client: CodeforcesClient,
    store: BookmarkStore<R>,
    max_results: usize,
}

impl<R: BookmarkRepository> ProblemBrowserService<R> {
    pub fn new(config: &AppConfig, store: BookmarkStore<R>) -> Result<Self> {
        Ok(Self {
            api_client: CodeforcesClient::new(&config.api)?,
            store,
            max_results: config.browse.max_results,
        })
    }

    /// Filters the catalog and flags each hit as solved/bookmarked.
    pub async fn browse(
        &self,
        rating: Option<i32>,
        tags: &[String],
        handle: Option<&str>,
    ) -> Result<ProblemBrowseReport> {
        info!("=== Browsing problemset ===");

        let (problems, solved) = self.fetch_catalog_and_solved(handle).await?;
        info!("  → {} problems in catalog", problems.len());

        let filtered = filter_problems(&problems, rating, tags, self.max_results);
        info!("  → {} matches shown", filtered.len());

        Ok(ProblemBrowseReport {
            entries: build_entries(filtered, &solved, self.store.entries()),
        })
    }

    /// Toggles the bookmark for one problem, looked up in the live catalog.
    pub async fn toggle_bookmark(
        &mut self,
        contest_id: i64,
        index: &str,
    ) -> Result<BookmarkToggleReport> {
        let problems = self.api_client.problemset_problems().await?;

        let problem = problems
            .iter()
            .find(|p| p.contest_id == Some(contest_id) && p.index == index)
            .with_context(|| format!("No problem {}{} in the problemset", contest_id, index))?;

        let bookmark = Bookmark::from_problem(problem)
            .with_context(|| format!("Problem {}{} cannot be bookmarked", contest_id, index))?;

        let outcome = self.store.toggle(bookmark.clone())?;
        Ok(BookmarkToggleReport { outcome, bookmark })
    }

    async fn fetch_catalog_and_solved(
        &self,
        handle: Option<&str>,
    ) -> Result<(Vec<Problem>, HashSet<ProblemKey>)> {
        match handle {
            Some(handle) => {
                let (problems, submissions) = tokio::join!(
                    self.api_client.problemset_problems(),
                    self.api_client.user_status(handle),
                );
                Ok((problems?, solved_problem_keys(&submissions?)))
            }
            None => Ok((self.api_client.problemset_problems().await?, HashSet::new())),
        }
    }
}

fn build_entries(
    problems: Vec<Problem>,
    solved: &HashSet<ProblemKey>,
    bookmarks: &[Bookmark],
) -> Vec<ProblemEntry> {
    problems
        .into_iter()
        .map(|problem| {
            let key = problem.key();
            let bookmarked = key
                .contest_id
                .is_some_and(|id| bookmarks.iter().any(|b| b.matches(id, &key.index)));

            ProblemEntry {
                solved: solved.contains(&key),
                bookmarked,
                problem,
            }
        })
        .collect()
}
