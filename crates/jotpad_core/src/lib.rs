//! Core domain logic for Jotpad.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod session;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{normalize_field, Note, NoteId, NoteValidationError};
pub use session::note_list::{NoteListError, NoteListState};
pub use session::onboarding::{SessionPhase, SessionState};
pub use session::{Intent, Outcome, Session};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
