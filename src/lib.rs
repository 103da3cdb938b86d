pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod domain;
pub mod http;
pub mod services;
pub mod stats;
pub mod storage;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::warn;

use crate::cli::Command;
use crate::config::is_known_tag;
use crate::config::settings::AppConfig;
use crate::services::comparison::ComparisonService;
use crate::services::problem_browser::ProblemBrowserService;
use crate::services::user_stats::UserStatsService;
use crate::storage::{BookmarkStore, JsonFileRepository};

const BOOKMARKS_PATH_VAR: &str = "BOOKMARKS_PATH";
const DEFAULT_BOOKMARKS_PATH: &str = "bookmarks.json";

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_stats(handle: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = UserStatsService::new(&config)?;
        let report = service.run(handle).await?;
        display::print_user_stats(&report);
        Ok(())
    })
}

pub fn handle_compare(first: &str, second: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ComparisonService::new(&config)?;
        let report = service.run(first, second).await?;
        display::print_comparison(&report);
        Ok(())
    })
}

pub fn handle_problems(rating: Option<i32>, tags: &[String], handle: Option<&str>) -> Result<()> {
    for tag in tags {
        if !is_known_tag(tag) {
            warn!("Tag {:?} is not in the known tag catalog", tag);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let store = open_bookmark_store()?;
        let service = ProblemBrowserService::new(&config, store)?;
        let report = service.browse(rating, tags, handle).await?;
        display::print_problems(&report);
        Ok(())
    })
}

pub fn handle_bookmark(contest_id: i64, index: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let store = open_bookmark_store()?;
        let mut service = ProblemBrowserService::new(&config, store)?;
        let report = service.toggle_bookmark(contest_id, index).await?;
        display::print_bookmark_toggle(&report);
        Ok(())
    })
}

/// Reads straight from the local store, so this works offline.
pub fn handle_bookmarks() -> Result<()> {
    let store = open_bookmark_store()?;
    display::print_bookmarks(store.entries());
    Ok(())
}

pub fn handle_tags() -> Result<()> {
    display::print_tag_catalog();
    Ok(())
}

fn open_bookmark_store() -> Result<BookmarkStore<JsonFileRepository>> {
    let path =
        std::env::var(BOOKMARKS_PATH_VAR).unwrap_or_else(|_| DEFAULT_BOOKMARKS_PATH.to_string());
    BookmarkStore::open(JsonFileRepository::new(path))
}
