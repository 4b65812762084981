//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotpad_core` linkage.
//! - Walk one scripted session so the intent surface is exercised end to
//!   end without any UI runtime.
//! - Keep output deterministic for quick local sanity checks.

use jotpad_core::{Intent, Outcome, Session};

fn main() {
    println!("jotpad_core ping={}", jotpad_core::ping());
    println!("jotpad_core version={}", jotpad_core::core_version());

    let mut session = Session::new();
    step(&mut session, Intent::DismissOnboarding);
    step(
        &mut session,
        Intent::SetDraftTitle("Groceries".to_string()),
    );
    step(
        &mut session,
        Intent::SetDraftDescription("Milk, eggs".to_string()),
    );
    step(&mut session, Intent::AddNote);

    // Blank title: the commit must be rejected and the list untouched.
    step(&mut session, Intent::SetDraftTitle("   ".to_string()));
    step(
        &mut session,
        Intent::SetDraftDescription("unreachable".to_string()),
    );
    step(&mut session, Intent::AddNote);

    step(&mut session, Intent::SetDraftTitle("Trip".to_string()));
    step(
        &mut session,
        Intent::SetDraftDescription("Pack bags".to_string()),
    );
    step(&mut session, Intent::AddNote);

    let first = session.notes().notes()[0].clone();
    step(&mut session, Intent::RemoveNote(first));

    for note in session.notes().notes() {
        println!("note title={} description={}", note.title, note.description);
    }
    println!("notes count={}", session.notes().len());
}

fn step(session: &mut Session, intent: Intent) {
    let outcome = session.apply(intent);
    println!("outcome={}", outcome_label(&outcome));
}

fn outcome_label(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::OnboardingDismissed => "onboarding_dismissed",
        Outcome::DraftUpdated => "draft_updated",
        Outcome::NoteAdded(_) => "note_added",
        Outcome::NoteRemoved(_) => "note_removed",
        Outcome::Rejected(_) => "rejected",
    }
}
