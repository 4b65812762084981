//! Note list state and its validated commands.
//!
//! # Responsibility
//! - Own the ordered note collection and the transient draft buffer.
//! - Enforce commit-time validation for `add_note`.
//! - Resolve value-based and id-based removal deterministically.
//!
//! # Invariants
//! - The list never contains a note with a blank title or description.
//! - Insertion order is preserved; new notes append at the end.
//! - The draft buffer is reset only on a successful commit, never on
//!   rejection.

use crate::model::note::{Note, NoteId, NoteValidationError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Command failure for note list operations.
///
/// Every variant is recoverable; no list command has a fatal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteListError {
    /// Draft failed commit-time validation. The draft buffer is untouched
    /// so the user can correct input.
    InvalidDraft(NoteValidationError),
    /// No matching note in the list. Benign: a double-delete from a stale
    /// view lands here and has no visible effect.
    NotFound,
}

impl Display for NoteListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::NotFound => write!(f, "note not found in list"),
        }
    }
}

impl Error for NoteListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<NoteValidationError> for NoteListError {
    fn from(value: NoteValidationError) -> Self {
        Self::InvalidDraft(value)
    }
}

/// Ordered note collection plus the pending input buffer.
///
/// Created empty at session start, dropped with the session. All mutation
/// goes through the named commands; callers only ever see `&[Note]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListState {
    notes: Vec<Note>,
    draft_title: String,
    draft_description: String,
}

impl NoteListState {
    /// Creates an empty list with a blank draft buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of committed notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of committed notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the list holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Current draft title, exactly as last set.
    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    /// Current draft description, exactly as last set.
    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    /// Unconditionally replaces the draft title. Never validates; blanks
    /// are caught at commit time.
    pub fn set_draft_title(&mut self, value: impl Into<String>) {
        self.draft_title = value.into();
    }

    /// Unconditionally replaces the draft description.
    pub fn set_draft_description(&mut self, value: impl Into<String>) {
        self.draft_description = value.into();
    }

    /// Commits the draft buffer as a new note at the end of the list.
    ///
    /// # Contract
    /// - Both draft fields are trimmed before validation; the committed
    ///   note stores the trimmed values.
    /// - Rejection produces no mutation at all.
    /// - On success both draft fields reset to empty and the created note
    ///   is returned.
    ///
    /// # Errors
    /// - `InvalidDraft(BlankTitle)` when the title trims to empty.
    /// - `InvalidDraft(BlankDescription)` when the description trims to
    ///   empty.
    pub fn add_note(&mut self) -> Result<Note, NoteListError> {
        let note = match Note::new(self.draft_title.as_str(), self.draft_description.as_str()) {
            Ok(note) => note,
            Err(err) => {
                warn!(
                    "event=note_add module=note_list status=rejected error_code={}",
                    err.code()
                );
                return Err(err.into());
            }
        };

        self.notes.push(note.clone());
        self.draft_title.clear();
        self.draft_description.clear();
        info!(
            "event=note_add module=note_list status=ok count={}",
            self.notes.len()
        );
        Ok(note)
    }

    /// Removes the first note matching `target` by field-value equality.
    ///
    /// # Contract
    /// - Matching compares title and description only; ids are ignored, so
    ///   a stale copy held by a view still matches.
    /// - With duplicate content pairs, exactly the first match in insertion
    ///   order is removed.
    ///
    /// # Errors
    /// - `NotFound` when no note matches; the list is unchanged.
    pub fn remove_note(&mut self, target: &Note) -> Result<Note, NoteListError> {
        let position = self.notes.iter().position(|note| note.content_eq(target));
        self.take_at(position, "value")
    }

    /// Removes the note carrying `id`.
    ///
    /// Unambiguous under duplicate content pairs, which value-based removal
    /// is not.
    ///
    /// # Errors
    /// - `NotFound` when no note carries `id`; the list is unchanged.
    pub fn remove_note_by_id(&mut self, id: NoteId) -> Result<Note, NoteListError> {
        let position = self.notes.iter().position(|note| note.id == id);
        self.take_at(position, "id")
    }

    fn take_at(&mut self, position: Option<usize>, mode: &str) -> Result<Note, NoteListError> {
        match position {
            Some(index) => {
                let removed = self.notes.remove(index);
                info!(
                    "event=note_remove module=note_list status=ok mode={mode} count={}",
                    self.notes.len()
                );
                Ok(removed)
            }
            None => {
                warn!("event=note_remove module=note_list status=rejected mode={mode} error_code=not_found");
                Err(NoteListError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteListState;

    #[test]
    fn draft_setters_overwrite_without_validation() {
        let mut list = NoteListState::new();
        list.set_draft_title("first");
        list.set_draft_title("  ");
        list.set_draft_description("anything");
        assert_eq!(list.draft_title(), "  ");
        assert_eq!(list.draft_description(), "anything");
    }

    #[test]
    fn new_list_is_empty_with_blank_draft() {
        let list = NoteListState::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.draft_title(), "");
        assert_eq!(list.draft_description(), "");
    }
}
