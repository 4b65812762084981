//! Onboarding gate state machine.
//!
//! # Responsibility
//! - Track whether the first-launch welcome screen has been dismissed.
//!
//! # Invariants
//! - Two phases only, `Onboarding -> Active`, with a single forward edge.
//! - The transition is monotonic within a session; there is no edge back.

use log::info;
use serde::{Deserialize, Serialize};

/// Screen-gating phase for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// First-launch welcome screen is showing.
    Onboarding,
    /// Note list is accessible.
    Active,
}

/// Session-scoped onboarding state.
///
/// Created in `Onboarding` at session start; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    phase: SessionPhase,
}

impl SessionState {
    /// Creates state for a fresh session, with onboarding showing.
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Onboarding,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Pure query: `true` once the session has reached `Active`.
    pub fn is_onboarding_dismissed(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Moves the session to `Active`.
    ///
    /// Idempotent: calling when already `Active` is a no-op with identical
    /// resulting state. No error conditions.
    pub fn dismiss_onboarding(&mut self) {
        if self.phase == SessionPhase::Active {
            return;
        }
        self.phase = SessionPhase::Active;
        info!("event=onboarding_dismiss module=session status=ok");
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionPhase, SessionState};

    #[test]
    fn fresh_session_shows_onboarding() {
        let state = SessionState::new();
        assert_eq!(state.phase(), SessionPhase::Onboarding);
        assert!(!state.is_onboarding_dismissed());
    }
}
