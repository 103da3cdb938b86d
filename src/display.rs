use colored::{Color, ColoredString, Colorize};

use crate::config::PROBLEM_TAGS;
use crate::domain::{Bookmark, RatingChange, UserInfo};
use crate::services::comparison::ComparedUser;
use crate::services::problem_browser::ProblemEntry;
use crate::services::{
    BookmarkToggleReport, ComparisonReport, ProblemBrowseReport, UserStatsReport,
};
use crate::stats::rank::RANK_BANDS;
use crate::stats::{RatingStatsSummary, rank_title};
use crate::storage::ToggleOutcome;

const DIVIDER_WIDTH: usize = 52;

pub fn print_user_stats(report: &UserStatsReport) {
    print_header(&report.info.handle, report.info.rating);
    print_profile(&report.info);

    println!();
    println!("Activity");
    println!("  Submissions       {}", report.total_submissions);
    println!("  Problems solved   {}", report.solved_count);

    match &report.contest_summary {
        Some(summary) => print_contest_summary(summary),
        None => {
            println!();
            println!("No rated contests yet");
        }
    }

    print_recent_contests(&report.recent_contests);
    print_tag_counts(report);
    print_rating_counts(report);
}

pub fn print_comparison(report: &ComparisonReport) {
    let title = format!(
        "{}  vs  {}",
        report.first.info.handle, report.second.info.handle
    );
    print_header(&title, None);

    print_compared_user(&report.first);
    println!();
    print_compared_user(&report.second);

    println!();
    println!("Rating progression, contest by contest");
    let width = report
        .first
        .info
        .handle
        .len()
        .max(report.second.info.handle.len());

    for (ordinal, row) in report.rows.iter().enumerate() {
        println!("  {:>3}. {}", ordinal + 1, row.contest_name);
        println!(
            "       {:<width$}  rank {:<7} {:>5} ({})",
            report.first.info.handle,
            row.first.rank,
            row.first.new_rating,
            format_delta(row.first.delta),
        );
        match &row.second {
            Some(result) => println!(
                "       {:<width$}  rank {:<7} {:>5} ({})",
                report.second.info.handle,
                result.rank,
                result.new_rating,
                format_delta(result.delta),
            ),
            None => println!("       {:<width$}  -", report.second.info.handle),
        }
    }
}

pub fn print_problems(report: &ProblemBrowseReport) {
    if report.entries.is_empty() {
        println!("No problems matched the filter");
        return;
    }

    println!("Problems ({} shown)", report.entries.len());
    for entry in &report.entries {
        print_problem_entry(entry);
    }
}

pub fn print_bookmark_toggle(report: &BookmarkToggleReport) {
    let bookmark = &report.bookmark;
    let label = match report.outcome {
        ToggleOutcome::Added => "Bookmarked".green().bold(),
        ToggleOutcome::Removed => "Removed bookmark".yellow().bold(),
    };

    println!(
        "{} {}{}  {}",
        label, bookmark.contest_id, bookmark.index, bookmark.name
    );
    println!("  {}", bookmark.url());
}

pub fn print_bookmarks(bookmarks: &[Bookmark]) {
    if bookmarks.is_empty() {
        println!("No bookmarks saved yet");
        return;
    }

    println!("Bookmarks ({})", bookmarks.len());
    for bookmark in bookmarks {
        println!(
            "  {}{:<4} {:<40} {}",
            bookmark.contest_id,
            bookmark.index,
            bookmark.name,
            format_problem_rating(bookmark.rating),
        );
        if !bookmark.tags.is_empty() {
            println!("       tags: {}", bookmark.tags.join(", "));
        }
        println!("       {}", bookmark.url());
    }
}

pub fn print_tag_catalog() {
    println!("Known problem tags");
    for tag in PROBLEM_TAGS {
        println!("  {}", tag);
    }
}

// --- Section Helpers ---

fn print_header(title: &str, rating: Option<i32>) {
    let divider = "=".repeat(DIVIDER_WIDTH);
    let name = match rating {
        Some(rating) => tier_colored(title, rating).bold(),
        None => title.bold(),
    };

    println!("{}", divider);
    println!("  {}", name);
    println!("{}", divider);
}

fn print_profile(info: &UserInfo) {
    match info.rating {
        Some(rating) => {
            println!(
                "  Rank          {}",
                tier_colored(rank_title(rating), rating)
            );
            println!("  Rating        {}", rating);
        }
        None => println!("  Rating        unrated"),
    }

    if let Some(max_rating) = info.max_rating {
        println!(
            "  Max rating    {}  ({})",
            max_rating,
            tier_colored(rank_title(max_rating), max_rating)
        );
    }

    println!("  Contribution  {}", format_delta(info.contribution));
    println!("  Friend of     {} users", info.friend_of_count);
}

fn print_contest_summary(summary: &RatingStatsSummary) {
    println!();
    println!("Contests ({} rated)", summary.total_contests);
    println!(
        "  Rating up / down / unchanged   {} / {} / {}",
        summary.increased, summary.decreased, summary.unchanged
    );
    println!(
        "  Best rating   {}  ({})",
        summary.max_rating,
        tier_colored(rank_title(summary.max_rating), summary.max_rating)
    );
    println!("  Average rank  {}", summary.average_rank);
}

fn print_recent_contests(contests: &[RatingChange]) {
    if contests.is_empty() {
        return;
    }

    println!();
    println!("Recent contests");
    for contest in contests {
        println!(
            "  {}  {:<42} rank {:<7} {:>5} ({})",
            format_contest_date(contest),
            contest.contest_name,
            contest.rank,
            contest.new_rating,
            format_delta(contest.delta()),
        );
    }
}

fn print_tag_counts(report: &UserStatsReport) {
    if report.tag_counts.is_empty() {
        return;
    }

    println!();
    println!("Solved by tag");
    for tag in &report.tag_counts {
        println!("  {:<28} {:>5}", tag.name, tag.value);
    }
}

fn print_rating_counts(report: &UserStatsReport) {
    if report.rating_counts.is_empty() {
        return;
    }

    println!();
    println!("Solved by difficulty");
    for (rating, count) in &report.rating_counts {
        println!("  {:>5}  {:>5}", rating, count);
    }
}

fn print_compared_user(user: &ComparedUser) {
    let summary = &user.summary;

    match user.info.rating {
        Some(rating) => println!(
            "{}  ({})",
            tier_colored(&user.info.handle, rating).bold(),
            tier_colored(rank_title(rating), rating)
        ),
        None => println!("{}", user.info.handle.bold()),
    }
    println!(
        "  Contests      {} rated, average rank {}",
        summary.total_contests, summary.average_rank
    );
    println!(
        "  Up / down / unchanged   {} / {} / {}",
        summary.increased, summary.decreased, summary.unchanged
    );
    println!(
        "  Best rating   {}  ({})",
        summary.max_rating,
        tier_colored(rank_title(summary.max_rating), summary.max_rating)
    );
}

fn print_problem_entry(entry: &ProblemEntry) {
    let problem = &entry.problem;
    let solved_mark = if entry.solved {
        "[x]".green()
    } else {
        "[ ]".normal()
    };
    let bookmark_mark = if entry.bookmarked {
        "  [bookmarked]".yellow().to_string()
    } else {
        String::new()
    };

    let id = match problem.contest_id {
        Some(contest_id) => format!("{}{}", contest_id, problem.index),
        None => problem.index.clone(),
    };

    println!(
        "  {} {:<7} {:<40} {}  {}{}",
        solved_mark,
        id,
        problem.name,
        format_problem_rating(problem.rating),
        problem.tags.join(", "),
        bookmark_mark,
    );
    if let Some(url) = problem.url() {
        println!("      {}", url);
    }
}

// --- Formatting Helpers ---

/// One color per `RANK_BANDS` band, plus the tier above the last bound.
const BAND_COLORS: [Color; RANK_BANDS.len() + 1] = [
    Color::White,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
    Color::Yellow,
    Color::Yellow,
    Color::Red,
    Color::Red,
    Color::BrightRed,
];

/// Colors text with the terminal color of the rating's rank tier.
fn tier_colored(text: &str, rating: i32) -> ColoredString {
    text.color(band_color(rating))
}

fn band_color(rating: i32) -> Color {
    let band = RANK_BANDS
        .iter()
        .position(|(upper, _)| rating < *upper)
        .unwrap_or(RANK_BANDS.len());
    BAND_COLORS[band]
}

fn format_delta(delta: i32) -> ColoredString {
    if delta > 0 {
        format!("+{}", delta).green()
    } else if delta < 0 {
        delta.to_string().red()
    } else {
        "0".normal()
    }
}

fn format_problem_rating(rating: Option<i32>) -> String {
    match rating {
        Some(rating) => format!("{:>4}", rating),
        None => "   -".to_string(),
    }
}

fn format_contest_date(contest: &RatingChange) -> String {
    match contest.update_time() {
        Some(time) => time.format("%Y-%m-%d").to_string(),
        None => "          ".to_string(),
    }
}
