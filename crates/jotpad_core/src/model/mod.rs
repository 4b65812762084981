//! Domain model for committed notes.
//!
//! # Responsibility
//! - Define the canonical value type held by the note list.
//! - Own trim-and-validate rules for note text fields.
//!
//! # Invariants
//! - A `Note` cannot exist with a blank title or description.
//! - Committed notes are immutable; the only lifecycle is create and delete.

pub mod note;
