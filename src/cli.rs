use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Codeforces statistics dashboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Show a user's profile, contest summary and solved-problem breakdown
    Stats {
        /// Codeforces handle
        handle: String,
    },
    /// Compare two users contest by contest
    Compare {
        /// First handle; the history table follows this user's contests
        first: String,
        /// Second handle
        second: String,
    },
    /// Browse the problemset by difficulty and tags
    Problems {
        /// Difficulty the problems must match exactly
        #[arg(short, long)]
        rating: Option<i32>,
        /// Comma-separated tags every problem must carry
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Mark problems this user has already solved
        #[arg(long)]
        handle: Option<String>,
    },
    /// Bookmark a problem, or remove the bookmark if it already exists
    Bookmark {
        /// Contest id part of the problem identity
        contest_id: i64,
        /// Index within the contest, e.g. A or C1
        index: String,
    },
    /// List saved bookmarks
    Bookmarks,
    /// List the known problem tags
    Tags,
}
