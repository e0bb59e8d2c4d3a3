//! Terminal rendering of a dashboard batch.
//!
//! Plain-text stand-ins for the table and bar chart views. Colour follows
//! `colored`'s global switch, so callers can disable it for non-TTY output.

use colored::{ColoredString, Colorize};
use std::fmt::Write;

use crate::analysis::{HashtagSentimentTally, PostRecord, SentimentCounts, SentimentLabel};

/// Width of the longest bar in [`render_bar_chart`].
pub const BAR_WIDTH: usize = 40;

/// Longest post preview shown in a table cell.
const MAX_CELL_CHARS: usize = 48;

fn paint(label: SentimentLabel, text: &str) -> ColoredString {
    match label {
        SentimentLabel::Positive => text.green(),
        SentimentLabel::Negative => text.red(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Render records as a table of index, post, cleaned text, hashtags and sentiment.
pub fn render_table(records: &[PostRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<w$}  {:<w$}  {:<20}  {}",
        "#",
        "Post",
        "Cleaned",
        "Hashtags",
        "Sentiment",
        w = MAX_CELL_CHARS
    );
    let _ = writeln!(out, "{}", "-".repeat(3 + 2 * (MAX_CELL_CHARS + 2) + 22 + 11));

    for (i, record) in records.iter().enumerate() {
        let label = record.sentiment;
        let _ = writeln!(
            out,
            "{:>3}  {:<w$}  {:<w$}  {:<20}  {}",
            i,
            truncate(&record.post.text, MAX_CELL_CHARS),
            truncate(&record.post.cleaned, MAX_CELL_CHARS),
            truncate(&record.hashtags().join(" "), 20),
            paint(label, label.as_str()),
            w = MAX_CELL_CHARS
        );
    }
    out
}

/// Render label counts as a horizontal bar chart scaled to [`BAR_WIDTH`].
pub fn render_bar_chart(counts: &SentimentCounts) -> String {
    let max = SentimentLabel::all()
        .iter()
        .map(|&l| counts.get(l))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for &label in SentimentLabel::all() {
        let count = counts.get(label);
        let len = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        let bar = "#".repeat(len);
        let _ = writeln!(
            out,
            "{:<8} | {} {}",
            label.as_str(),
            paint(label, &bar),
            count
        );
    }
    out
}

/// Render the per-hashtag sentiment tally, one line per hashtag.
pub fn render_hashtag_sentiment(tally: &HashtagSentimentTally) -> String {
    let mut out = String::new();
    for (tag, counts) in tally.iter() {
        let _ = writeln!(
            out,
            "{:<24} {} / {}",
            tag,
            paint(SentimentLabel::Positive, &format!("+{}", counts.positive)),
            paint(SentimentLabel::Negative, &format!("-{}", counts.negative)),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{build_records, sentiment_by_hashtag};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_bar_chart_scales_to_max() {
        plain();
        let chart = render_bar_chart(&SentimentCounts {
            positive: 2,
            negative: 1,
        });
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("POSITIVE"));
        assert!(lines[0].contains(&"#".repeat(BAR_WIDTH)));
        assert!(lines[0].ends_with(" 2"));
        assert!(lines[1].contains(&"#".repeat(BAR_WIDTH / 2)));
        assert!(!lines[1].contains(&"#".repeat(BAR_WIDTH / 2 + 1)));
    }

    #[test]
    fn test_bar_chart_empty_counts() {
        plain();
        let chart = render_bar_chart(&SentimentCounts::default());
        assert!(!chart.contains('#'));
    }

    #[test]
    fn test_table_lists_every_record() {
        plain();
        let records = build_records(
            &["Worried about ethics in AI. #AIethics #risk", "Fine"],
            &["NEGATIVE", "POSITIVE"],
        )
        .unwrap();
        let table = render_table(&records);
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("#AIethics #risk"));
        assert!(table.contains("NEGATIVE"));
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(100);
        let short = truncate(&long, 10);
        assert_eq!(short.chars().count(), 10);
        assert!(short.ends_with("..."));
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_hashtag_sentiment_lines() {
        plain();
        let records = build_records(&["#a #b", "#a"], &["POSITIVE", "NEGATIVE"]).unwrap();
        let rendered = render_hashtag_sentiment(&sentiment_by_hashtag(&records));
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#a"));
        assert!(lines[0].contains("+1 / -1"));
    }
}
