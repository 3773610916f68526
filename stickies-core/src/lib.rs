//! Core library for Stickies — a local-first sticky-notes application.
//!
//! The primary entry point is [`NoteStore`], which owns the in-memory note
//! collection and mirrors it wholesale to an injected [`Storage`] backend.
//! All note mutations go through `NoteStore` methods; rendering consumes
//! [`project`] as a one-way projection and never feeds back into persistence.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use self::core::{
    debounce::{SaveScheduler, SAVE_DEBOUNCE},
    error::{Result, StickiesError},
    id::IdGenerator,
    note::{Note, NoteColor},
    storage::{MemoryStorage, SqliteStorage, Storage},
    store::{NoteStore, NOTES_KEY},
    view::{project, NoteCard},
};
