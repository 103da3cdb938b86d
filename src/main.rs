use anyhow::Result;

use cf_stats::cli::Command;
use cf_stats::{
    handle_bookmark, handle_bookmarks, handle_compare, handle_problems, handle_stats, handle_tags,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Stats { handle } => handle_stats(handle),
        Command::Compare { first, second } => handle_compare(first, second),
        Command::Problems {
            rating,
            tags,
            handle,
        } => handle_problems(*rating, tags, handle.as_deref()),
        Command::Bookmark { contest_id, index } => handle_bookmark(*contest_id, index),
        Command::Bookmarks => handle_bookmarks(),
        Command::Tags => handle_tags(),
    }
}
