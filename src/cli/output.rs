//! Output formatting utilities

use crate::application::StatisticsReport;
use crate::domain::content::plain_text;
use crate::domain::{JournalEntry, Mood, TimelinePoint};

const DATE_FORMAT: &str = "%d-%m-%Y";

/// Format a list of entries, one per line
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}  {:<10}  {}\n",
            entry.id,
            entry.date.format(DATE_FORMAT),
            entry.mood.label(),
            entry.title
        ));
    }
    output
}

/// Format a single entry with its plain-text content
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = format!(
        "{}\n{}  {}\n",
        entry.title,
        entry.date.format("%d-%m-%Y %H:%M"),
        entry.mood.label()
    );
    if let Some(updated) = entry.updated_at {
        output.push_str(&format!("Updated {}\n", updated.format("%d-%m-%Y %H:%M")));
    }

    let text = plain_text(&entry.content);
    let paragraphs: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    output.push('\n');
    output.push_str(&paragraphs.join("\n"));
    output.push('\n');
    output
}

/// Format the statistics view
pub fn format_report(report: &StatisticsReport) -> String {
    let most_frequent = report
        .most_frequent_mood
        .map(|mood| mood.label().to_string())
        .unwrap_or_else(|| "none".to_string());

    let mut output = format!(
        "Total entries: {}\nMost frequent mood: {}\nAverage words per entry: {}\n",
        report.total_entries, most_frequent, report.average_word_count
    );

    if !report.mood_distribution.is_empty() {
        output.push_str("\nMood distribution:\n");
        for share in &report.mood_distribution {
            output.push_str(&format!(
                "  {:<10}  {:>3}  {:>3}%\n",
                share.mood.label(),
                share.count,
                share.percent
            ));
        }
    }

    output
}

/// Format the mood timeline, oldest first
pub fn format_timeline(points: &[TimelinePoint]) -> String {
    if points.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for point in points {
        output.push_str(&format!(
            "{}  {}  {}\n",
            point.date.format(DATE_FORMAT),
            point.mood_rank,
            point.mood.label()
        ));
    }
    output
}

/// Format the mood enumeration with ranks
pub fn format_mood_list() -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!(
            "{}  {:<10}  ({})\n",
            mood.rank(),
            mood.label(),
            mood.english_name()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MoodShare, TimeRange};
    use chrono::{TimeZone, Utc};

    fn sample() -> JournalEntry {
        JournalEntry {
            id: 1737106200000,
            title: "Morning run".to_string(),
            date: Utc.with_ymd_and_hms(2025, 1, 17, 9, 30, 0).unwrap(),
            mood: Mood::Energetico,
            content: "<p>Ran 5k</p>\n<p>Felt great</p>".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let output = format_entry_list(&[sample()]);
        assert_eq!(
            output,
            "1737106200000  17-01-2025  Energético  Morning run\n"
        );
    }

    #[test]
    fn test_format_entry_strips_markup() {
        let output = format_entry(&sample());
        assert!(output.starts_with("Morning run\n17-01-2025 09:30  Energético\n"));
        assert!(output.contains("Ran 5k"));
        assert!(output.contains("Felt great"));
        assert!(!output.contains("<p>"));
        assert!(!output.contains("Updated"));
    }

    #[test]
    fn test_format_entry_shows_update_time() {
        let mut entry = sample();
        entry.updated_at = Some(Utc.with_ymd_and_hms(2025, 1, 18, 20, 5, 0).unwrap());
        assert!(format_entry(&entry).contains("Updated 18-01-2025 20:05"));
    }

    #[test]
    fn test_format_empty_report() {
        let report = StatisticsReport {
            range: TimeRange::All,
            total_entries: 0,
            most_frequent_mood: None,
            average_word_count: 0,
            mood_distribution: vec![],
        };
        let output = format_report(&report);
        assert!(output.contains("Total entries: 0"));
        assert!(output.contains("Most frequent mood: none"));
        assert!(!output.contains("Mood distribution"));
    }

    #[test]
    fn test_format_report_distribution() {
        let report = StatisticsReport {
            range: TimeRange::All,
            total_entries: 3,
            most_frequent_mood: Some(Mood::Feliz),
            average_word_count: 12,
            mood_distribution: vec![
                MoodShare { mood: Mood::Feliz, count: 2, percent: 67 },
                MoodShare { mood: Mood::Triste, count: 1, percent: 33 },
            ],
        };
        let output = format_report(&report);
        assert!(output.contains("Most frequent mood: Feliz"));
        assert!(output.contains("Average words per entry: 12"));
        assert!(output.contains("Feliz         2   67%"));
    }

    #[test]
    fn test_format_mood_list() {
        let output = format_mood_list();
        assert_eq!(output.lines().count(), 8);
        assert!(output.starts_with("0  Feliz       (happy)\n"));
    }
}
