//! History summaries and display formatting
//!
//! Breakdown of cooked types for the history pie chart, plus the duration and
//! date strings shown next to history entries and on the cooking timer.

use chrono::{Datelike, TimeZone, Utc};
use serde::Serialize;

use super::models::HistoryEntry;
use crate::types::BreakfastType;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// One slice of the history pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeShare {
    pub breakfast_type: BreakfastType,
    pub count: usize,
    /// Share of all history entries, 0-100
    pub percentage: f64,
}

/// Count history entries per type, in catalog order. Types never cooked are omitted.
pub fn type_breakdown(history: &[HistoryEntry]) -> Vec<TypeShare> {
    let mut counts = [0usize; BreakfastType::ALL.len()];
    for entry in history {
        if let Some(slot) = BreakfastType::ALL.iter().position(|t| *t == entry.recipe_type) {
            counts[slot] += 1;
        }
    }

    let total = history.len() as f64;
    BreakfastType::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&breakfast_type, count)| TypeShare {
            breakfast_type,
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect()
}

/// "45 min" under an hour, "1h 5m" otherwise
pub fn format_duration(ms: i64) -> String {
    let minutes = ms.max(0) / MINUTE_MS;
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Timer display: "m:ss", or "h:mm:ss" once past an hour
pub fn format_elapsed(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{} {}s ago", n, unit)
    } else {
        format!("{} {} ago", n, unit)
    }
}

/// Relative date of a history entry; both arguments are Unix milliseconds (UTC)
pub fn format_relative(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;
    if diff < HOUR_MS {
        return "Just now".to_string();
    }
    if diff < DAY_MS {
        return plural(diff / HOUR_MS, "hour");
    }
    if diff < 7 * DAY_MS {
        return plural(diff / DAY_MS, "day");
    }

    let (Some(date), Some(today)) = (
        Utc.timestamp_millis_opt(timestamp).single(),
        Utc.timestamp_millis_opt(now).single(),
    ) else {
        return String::new();
    };

    if date.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entry(recipe_type: BreakfastType) -> HistoryEntry {
        HistoryEntry {
            id: "h".to_string(),
            recipe_id: "r".to_string(),
            recipe_name: "R".to_string(),
            recipe_type,
            timestamp: 0,
            scale_factor: 1.0,
            cooking_duration: None,
            prep_duration: None,
            cook_duration: None,
            rating: None,
        }
    }

    #[test]
    fn test_type_breakdown() {
        let history = vec![
            entry(BreakfastType::Crepes),
            entry(BreakfastType::Pancakes),
            entry(BreakfastType::Crepes),
            entry(BreakfastType::Crepes),
        ];

        let shares = type_breakdown(&history);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].breakfast_type, BreakfastType::Pancakes);
        assert_eq!(shares[1].count, 3);
        assert_relative_eq!(shares[0].percentage, 25.0);
        assert_relative_eq!(shares[1].percentage, 75.0);

        assert!(type_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(59 * MINUTE_MS + 59_000), "59 min");
        assert_eq!(format_duration(65 * MINUTE_MS), "1h 5m");
        assert_eq!(format_duration(2 * HOUR_MS), "2h 0m");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(65_000), "1:05");
        assert_eq!(format_elapsed(HOUR_MS + 2 * MINUTE_MS + 3_000), "1:02:03");
        assert_eq!(format_elapsed(-5_000), "0:00");
    }

    #[test]
    fn test_format_relative() {
        // 2024-03-15T12:00:00Z
        let now = 1_710_504_000_000;

        assert_eq!(format_relative(now - 30 * MINUTE_MS, now), "Just now");
        assert_eq!(format_relative(now - HOUR_MS, now), "1 hour ago");
        assert_eq!(format_relative(now - 5 * HOUR_MS, now), "5 hours ago");
        assert_eq!(format_relative(now - DAY_MS, now), "1 day ago");
        assert_eq!(format_relative(now - 6 * DAY_MS, now), "6 days ago");
        assert_eq!(format_relative(now - 10 * DAY_MS, now), "Mar 5");
        assert_eq!(format_relative(now - 100 * DAY_MS, now), "Dec 6, 2023");
    }
}
