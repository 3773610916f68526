//! The in-memory note collection and its persistence contract.

use crate::{IdGenerator, Note, NoteColor, Result, Storage};

/// Storage key holding the serialized note collection.
pub const NOTES_KEY: &str = "notes-app-data";

/// The note collection, mirrored wholesale to durable storage.
///
/// `NoteStore` is the single source of truth at runtime: rendering is a
/// projection of [`list`](Self::list) and never feeds back into
/// persistence. Every mutation rewrites the full serialized collection
/// under [`NOTES_KEY`] — no incremental diff, no transaction.
pub struct NoteStore {
    notes: Vec<Note>,
    storage: Box<dyn Storage>,
    ids: IdGenerator,
}

impl NoteStore {
    /// Opens the store, loading the collection once from `storage`.
    ///
    /// Notes are ordered newest-first by creation date. An absent payload
    /// yields an empty collection; a malformed one is discarded with a
    /// warning rather than surfaced, so a corrupt store never blocks the
    /// application from starting.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StickiesError::Database`] if the backend read fails.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self> {
        let notes = match storage.get(NOTES_KEY)? {
            None => Vec::new(),
            Some(payload) => match serde_json::from_str::<Vec<Note>>(&payload) {
                Ok(mut notes) => {
                    // Newest first. The sort is stable, so records sharing a
                    // timestamp keep their stored order.
                    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    notes
                }
                Err(e) => {
                    log::warn!("discarding malformed note payload: {e}");
                    Vec::new()
                }
            },
        };

        Ok(Self {
            notes,
            storage,
            ids: IdGenerator::new(),
        })
    }

    /// Creates a new empty note with the given color and persists
    /// immediately.
    ///
    /// The note is prepended so the visible collection stays newest-first.
    /// Returns a copy of the freshly created note.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StickiesError::Database`] if the write fails; the
    /// note is still part of the in-memory collection in that case.
    pub fn create(&mut self, color: NoteColor) -> Result<Note> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let note = Note {
            id: self.ids.next(now_ms),
            content: String::new(),
            color,
            created_at: now_ms,
        };

        self.notes.insert(0, note.clone());
        self.persist()?;
        Ok(note)
    }

    /// Replaces the content of `id` and persists the full collection
    /// snapshot.
    ///
    /// An unknown id is silently ignored and nothing is written. The id
    /// and creation date of the note are never touched.
    pub fn update(&mut self, id: &str, content: &str) -> Result<()> {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.content = content.to_string();
                self.persist()
            }
            None => {
                log::debug!("update for unknown note id {id}, ignoring");
                Ok(())
            }
        }
    }

    /// Removes the note with `id` and persists.
    ///
    /// Deleting an absent id is a no-op and nothing is written.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// The live collection, newest first.
    #[must_use]
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a single note by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Serializes the full collection and overwrites the stored payload.
    ///
    /// Idempotent: two calls with no intervening mutation write identical
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StickiesError::Json`] if serialization fails or
    /// [`crate::StickiesError::Database`] if the backend write fails.
    pub fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.notes)?;
        self.storage.set(NOTES_KEY, &payload)
    }
}
