//! Note domain model.
//!
//! # Responsibility
//! - Define the immutable title/description pair committed to the list.
//! - Provide the field-equality predicate used by value-based removal.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `title` and `description` are non-blank and carry no leading or
//!   trailing whitespace.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a committed note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Validation failure for note construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty after trimming.
    BlankTitle,
    /// Description is empty after trimming.
    BlankDescription,
    /// Caller-provided id is the nil UUID.
    NilId,
}

impl NoteValidationError {
    /// Stable token for structured log lines.
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::BlankTitle => "blank_title",
            Self::BlankDescription => "blank_description",
            Self::NilId => "nil_id",
        }
    }
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "note title is blank after trimming"),
            Self::BlankDescription => write!(f, "note description is blank after trimming"),
            Self::NilId => write!(f, "note id must not be the nil uuid"),
        }
    }
}

impl Error for NoteValidationError {}

/// Committed note value.
///
/// Immutable once created: there is no update operation, only create and
/// delete. Two notes may share identical text; `id` is what tells them
/// apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable generated id. Excluded from the value-removal contract.
    pub id: NoteId,
    /// Trimmed, non-blank title.
    pub title: String,
    /// Trimmed, non-blank description.
    pub description: String,
}

impl Note {
    /// Creates a note with a freshly generated stable id.
    ///
    /// # Errors
    /// - `BlankTitle` / `BlankDescription` when the respective field trims
    ///   to empty. Title is checked first.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        Self::with_id(Uuid::new_v4(), title, description)
    }

    /// Creates a note with a caller-provided stable id.
    ///
    /// Used by tests and by any future import path where identity already
    /// exists externally.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `BlankTitle` / `BlankDescription` when the respective field trims
    ///   to empty.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        if id.is_nil() {
            return Err(NoteValidationError::NilId);
        }
        let title = normalize_field(&title.into()).ok_or(NoteValidationError::BlankTitle)?;
        let description =
            normalize_field(&description.into()).ok_or(NoteValidationError::BlankDescription)?;
        Ok(Self {
            id,
            title,
            description,
        })
    }

    /// Returns whether `other` matches this note by field-value equality.
    ///
    /// The removal contract matches on `(title, description)` only; `id`
    /// is deliberately excluded so a stale view copy still matches.
    pub fn content_eq(&self, other: &Note) -> bool {
        self.title == other.title && self.description == other.description
    }
}

/// Normalizes one note text field according to commit rules.
///
/// Returns `None` when the value trims to empty, `Some(trimmed)` otherwise.
pub fn normalize_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
