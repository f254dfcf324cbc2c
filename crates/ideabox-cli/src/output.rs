//! Output formatting for CLI responses.

use ideabox_types::{category_label, DayCount, Idea, IdeaStats};

/// One-line summary of an idea.
pub fn format_idea(idea: &Idea) -> String {
    let mark = if idea.completed { "x" } else { " " };
    format!(
        "[{mark}] #{:<4} {:<10} {:<19} {}",
        idea.id,
        category_label(&idea.category),
        idea.date.get(..19).unwrap_or(&idea.date),
        idea.title
    )
}

/// Summary line followed by the full content, indented.
pub fn format_detail(idea: &Idea) -> String {
    let body = idea
        .content
        .lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{body}", format_idea(idea))
}

/// Multi-line statistics block.
pub fn format_stats(stats: &IdeaStats) -> String {
    format!(
        "  Total      : {}\n  Completed  : {}\n  Today      : {}\n  Completion : {:.2}%",
        stats.total, stats.completed, stats.today, stats.completion_rate
    )
}

/// One line per day with a bar of `#` per idea.
pub fn format_week(days: &[DayCount]) -> String {
    days.iter()
        .map(|d| format!("  {} {:>3} {}", d.date, d.count, "#".repeat(d.count as usize)))
        .collect::<Vec<_>>()
        .join("\n")
}
