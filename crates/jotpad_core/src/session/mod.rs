//! Session ownership and intent dispatch.
//!
//! # Responsibility
//! - Own the onboarding gate and the note list for one application run.
//! - Turn view-layer intents into state transitions via `Session::apply`.
//!
//! # Invariants
//! - `Session` is the exclusive owner of both state components; nothing is
//!   shared outside it.
//! - `apply` is total: rejections come back as `Outcome::Rejected`, never
//!   as a panic or fatal error.
//! - Intents are processed one at a time to completion; nothing suspends.

pub mod note_list;
pub mod onboarding;

use crate::model::note::{Note, NoteId};
pub use note_list::{NoteListError, NoteListState};
pub use onboarding::{SessionPhase, SessionState};

/// View-layer command vocabulary, one variant per exposed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Leave the welcome screen for the note list.
    DismissOnboarding,
    /// Replace the draft title with the field's current text.
    SetDraftTitle(String),
    /// Replace the draft description with the field's current text.
    SetDraftDescription(String),
    /// Commit the draft buffer as a new note.
    AddNote,
    /// Delete the first note matching the carried value.
    RemoveNote(Note),
    /// Delete the note carrying this id.
    RemoveNoteById(NoteId),
}

/// Result of applying one intent, for the view layer to render from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Onboarding gate is now (or already was) dismissed.
    OnboardingDismissed,
    /// A draft field took the new text.
    DraftUpdated,
    /// Commit succeeded; carries the created note.
    NoteAdded(Note),
    /// Removal succeeded; carries the removed note.
    NoteRemoved(Note),
    /// Command was rejected; state is unchanged except as documented on
    /// the underlying operation.
    Rejected(NoteListError),
}

/// One run of the application.
///
/// Created at session start with onboarding showing and an empty list;
/// dropped at session end. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    notes: NoteListState,
}

impl Session {
    /// Creates a fresh session: onboarding showing, empty note list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Onboarding gate, for the view layer to pick a screen.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Read access to the note list and draft buffer.
    pub fn notes(&self) -> &NoteListState {
        &self.notes
    }

    /// Command access to the note list, for callers that bypass `apply`.
    pub fn notes_mut(&mut self) -> &mut NoteListState {
        &mut self.notes
    }

    /// Forwards to the onboarding gate. Idempotent.
    pub fn dismiss_onboarding(&mut self) {
        self.state.dismiss_onboarding();
    }

    /// Applies one view-layer intent and reports what happened.
    ///
    /// Total over its input: every intent maps to exactly one `Outcome`,
    /// and a rejected command leaves state untouched per the contract of
    /// the underlying operation.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::DismissOnboarding => {
                self.state.dismiss_onboarding();
                Outcome::OnboardingDismissed
            }
            Intent::SetDraftTitle(value) => {
                self.notes.set_draft_title(value);
                Outcome::DraftUpdated
            }
            Intent::SetDraftDescription(value) => {
                self.notes.set_draft_description(value);
                Outcome::DraftUpdated
            }
            Intent::AddNote => match self.notes.add_note() {
                Ok(note) => Outcome::NoteAdded(note),
                Err(err) => Outcome::Rejected(err),
            },
            Intent::RemoveNote(target) => match self.notes.remove_note(&target) {
                Ok(note) => Outcome::NoteRemoved(note),
                Err(err) => Outcome::Rejected(err),
            },
            Intent::RemoveNoteById(id) => match self.notes.remove_note_by_id(id) {
                Ok(note) => Outcome::NoteRemoved(note),
                Err(err) => Outcome::Rejected(err),
            },
        }
    }
}
