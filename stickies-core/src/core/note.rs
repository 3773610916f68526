use serde::{Deserialize, Serialize};

/// Color tag assigned to a note when it is created.
///
/// Serialized as a lowercase token so stored records stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Yellow,
    Green,
    Pink,
    Purple,
    Blue,
}

impl NoteColor {
    /// The palette offered by the "add note" control, in display order.
    pub const ALL: [NoteColor; 5] = [
        NoteColor::Yellow,
        NoteColor::Green,
        NoteColor::Pink,
        NoteColor::Purple,
        NoteColor::Blue,
    ];

    /// Returns the lowercase token used in stored records.
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Blue => "blue",
        }
    }
}

/// A single sticky note.
///
/// `id` is opaque, time-derived, and immutable once assigned; `created_at`
/// is Unix milliseconds and is stored under the wire name `date`, so a
/// serialized record reads `{id, content, color, date}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub color: NoteColor,
    #[serde(rename = "date")]
    pub created_at: i64,
}

impl Note {
    /// Case-insensitive substring match on content.
    ///
    /// An empty query matches every note, so clearing the search box
    /// restores the full collection.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        self.content.to_lowercase().contains(&query.to_lowercase())
    }
}
