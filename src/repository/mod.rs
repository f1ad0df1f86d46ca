use std::collections::HashMap;

use chrono::Utc;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("note {0} not found")]
    NotFound(i64),
}

/// In-memory note store. The sole owner of all note records and the only
/// place identifiers and timestamps are assigned.
///
/// Not internally synchronized: callers share it behind a single mutex and
/// hold the lock for the whole operation, so every operation is atomic with
/// respect to every other.
pub struct Repository {
    notes: HashMap<i64, Note>,
    next_id: i64,
}

impl Repository {
    pub fn new() -> Self {
        Self {
            notes: HashMap::new(),
            next_id: 1,
        }
    }

    /// Stores a new note under the next free identifier and stamps its
    /// creation time. Identifiers start at 1 and are never reused, even
    /// after deletion.
    pub fn create_note(&mut self, title: String, content: String) -> Note {
        let note = Note {
            id: self.next_id,
            title,
            content,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.notes.insert(note.id, note.clone());
        self.next_id += 1;

        note
    }

    pub fn get_one_note(&self, id: i64) -> Result<Note, RepositoryError> {
        self.notes
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    /// Returns every stored note. Order is unspecified.
    pub fn get_all_notes(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }

    /// Partial update: a non-empty `title` or `content` replaces the stored
    /// value, anything else keeps it. The update time is stamped even when
    /// no field changed.
    pub fn update_note(
        &mut self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, RepositoryError> {
        let note = self
            .notes
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            note.title = title;
        }
        if let Some(content) = content.filter(|c| !c.is_empty()) {
            note.content = content;
        }
        note.updated_at = Some(Utc::now());

        Ok(note.clone())
    }

    pub fn delete_note(&mut self, id: i64) -> Result<(), RepositoryError> {
        self.notes
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
