//! Pure rendering projection of the note collection.

use crate::{Note, NoteColor};
use chrono::{TimeZone, Utc};

/// One note prepared for display.
///
/// Cards are a one-way projection of the collection: mutating a card never
/// feeds back into the store or its persisted form.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteCard {
    pub id: String,
    pub content: String,
    pub color: NoteColor,
    /// Creation date in long form, e.g. "August 7, 2026".
    pub date_label: String,
    /// Whether the card matches the current search query. Non-matching
    /// cards are hidden, not removed from the collection.
    pub visible: bool,
}

/// Projects the collection for rendering, preserving collection order.
#[must_use]
pub fn project(notes: &[Note], query: &str) -> Vec<NoteCard> {
    notes
        .iter()
        .map(|note| NoteCard {
            id: note.id.clone(),
            content: note.content.clone(),
            color: note.color,
            date_label: format_date(note.created_at),
            visible: note.matches_search(query),
        })
        .collect()
}

/// Formats a Unix-millisecond timestamp as a long date.
///
/// An out-of-range timestamp yields an empty label rather than an error;
/// the card itself still renders.
fn format_date(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, content: &str, created_at: i64) -> Note {
        Note {
            id: id.to_string(),
            content: content.to_string(),
            color: NoteColor::Yellow,
            created_at,
        }
    }

    #[test]
    fn test_projection_preserves_order() {
        let notes = vec![note("b", "second", 2000), note("a", "first", 1000)];
        let cards = project(&notes, "");

        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!(cards.iter().all(|c| c.visible));
    }

    #[test]
    fn test_search_hides_non_matches() {
        let notes = vec![note("a", "hello world", 1000), note("b", "groceries", 2000)];
        let cards = project(&notes, "HELL");

        assert_eq!(cards.len(), 2);
        assert!(cards.iter().find(|c| c.id == "a").unwrap().visible);
        assert!(!cards.iter().find(|c| c.id == "b").unwrap().visible);
    }

    #[test]
    fn test_date_label_long_form() {
        let ts = Utc
            .with_ymd_and_hms(2026, 8, 7, 12, 30, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(format_date(ts), "August 7, 2026");
    }

    #[test]
    fn test_out_of_range_date_yields_empty_label() {
        assert_eq!(format_date(i64::MAX), "");
    }
}
