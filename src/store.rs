//! Memory storage for notes
//!
//! Will be destroyed on system shutdown

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::notes::Note;

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// Date to store the note under, replaces any note with the same date
    pub date: &'a str,

    pub title: &'a str,

    pub youtube_link: Option<&'a str>,

    pub description: Option<&'a str>,

    pub vocabulary: Option<&'a [String]>,
}

/// Values to update a Note
///
/// All fields are replaced, missing values are not taken from the existing note
pub struct UpdateNoteValues<'a> {
    pub title: Option<&'a str>,

    pub youtube_link: Option<&'a str>,

    pub description: Option<&'a str>,

    pub vocabulary: Option<&'a [String]>,
}

/// An in-memory note store, keyed by date
///
/// Cloning is cheap, all clones share the same notes
#[derive(Clone, Debug, Default)]
pub struct NoteStore {
    notes: Arc<Mutex<HashMap<String, Note>>>,
}

impl NoteStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a single note by its date
    pub async fn find_single_note_by_date(&self, date: &str) -> Option<Note> {
        self.notes.lock().await.get(date).cloned()
    }

    /// Find all notes, keyed by their date
    pub async fn find_all_notes(&self) -> HashMap<String, Note> {
        self.notes.lock().await.clone()
    }

    /// Create a note, overwriting the note with the same date
    pub async fn create_note(&self, values: &CreateNoteValues<'_>) -> Note {
        let now = Utc::now();

        let note = Note {
            id: now.timestamp_millis().to_string(),
            date: values.date.to_string(),
            youtube_link: values.youtube_link.unwrap_or_default().to_string(),
            title: Some(values.title.to_string()),
            description: values.description.unwrap_or_default().to_string(),
            vocabulary: values.vocabulary.unwrap_or_default().to_vec(),
            created_at: now,
            updated_at: None,
        };

        self.notes
            .lock()
            .await
            .insert(note.date.clone(), note.clone());

        note
    }

    /// Update the note of a date
    ///
    /// Returns `None` when there is no note for the date
    pub async fn update_note(&self, date: &str, values: &UpdateNoteValues<'_>) -> Option<Note> {
        self.notes.lock().await.get_mut(date).map(|note| {
            note.youtube_link = values.youtube_link.unwrap_or_default().to_string();
            note.title = values.title.map(ToString::to_string);
            note.description = values.description.unwrap_or_default().to_string();
            note.vocabulary = values.vocabulary.unwrap_or_default().to_vec();
            note.updated_at = Some(Utc::now());

            note.clone()
        })
    }

    /// Delete the note of a date
    ///
    /// Returns the removed note, `None` when there was none
    pub async fn delete_note(&self, date: &str) -> Option<Note> {
        self.notes.lock().await.remove(date)
    }
}
