use jotpad_core::{
    Intent, Note, NoteListError, NoteValidationError, Outcome, Session,
};
use uuid::Uuid;

#[test]
fn fresh_session_gates_note_list_behind_onboarding() {
    let session = Session::new();
    assert!(!session.state().is_onboarding_dismissed());
    assert!(session.notes().is_empty());
}

#[test]
fn intent_dispatch_matches_direct_calls() {
    let mut dispatched = Session::new();
    dispatched.apply(Intent::DismissOnboarding);
    dispatched.apply(Intent::SetDraftTitle("Groceries".to_string()));
    dispatched.apply(Intent::SetDraftDescription("Milk, eggs".to_string()));
    let added = dispatched.apply(Intent::AddNote);

    let mut direct = Session::new();
    direct.dismiss_onboarding();
    direct.notes_mut().set_draft_title("Groceries");
    direct.notes_mut().set_draft_description("Milk, eggs");
    let note = direct.notes_mut().add_note().expect("draft should commit");

    assert!(matches!(added, Outcome::NoteAdded(_)));
    assert_eq!(
        dispatched.state().is_onboarding_dismissed(),
        direct.state().is_onboarding_dismissed()
    );
    assert_eq!(dispatched.notes().len(), direct.notes().len());
    assert!(dispatched.notes().notes()[0].content_eq(&note));
}

#[test]
fn rejected_add_surfaces_as_rejected_outcome() {
    let mut session = Session::new();
    session.apply(Intent::DismissOnboarding);
    session.apply(Intent::SetDraftTitle("   ".to_string()));
    session.apply(Intent::SetDraftDescription("body".to_string()));

    let outcome = session.apply(Intent::AddNote);
    assert_eq!(
        outcome,
        Outcome::Rejected(NoteListError::InvalidDraft(
            NoteValidationError::BlankTitle
        ))
    );
    assert!(session.notes().is_empty());
    assert_eq!(session.notes().draft_title(), "   ");
}

#[test]
fn remove_intents_round_trip_both_identities() {
    let mut session = Session::new();
    session.apply(Intent::DismissOnboarding);

    session.apply(Intent::SetDraftTitle("A".to_string()));
    session.apply(Intent::SetDraftDescription("first".to_string()));
    let first = match session.apply(Intent::AddNote) {
        Outcome::NoteAdded(note) => note,
        other => panic!("expected NoteAdded, got {other:?}"),
    };

    session.apply(Intent::SetDraftTitle("B".to_string()));
    session.apply(Intent::SetDraftDescription("second".to_string()));
    let second = match session.apply(Intent::AddNote) {
        Outcome::NoteAdded(note) => note,
        other => panic!("expected NoteAdded, got {other:?}"),
    };

    let by_value = session.apply(Intent::RemoveNote(first.clone()));
    assert_eq!(by_value, Outcome::NoteRemoved(first));

    let by_id = session.apply(Intent::RemoveNoteById(second.id));
    assert_eq!(by_id, Outcome::NoteRemoved(second));
    assert!(session.notes().is_empty());

    let absent = session.apply(Intent::RemoveNoteById(Uuid::new_v4()));
    assert_eq!(absent, Outcome::Rejected(NoteListError::NotFound));
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let note = Note::with_id(note_id, "Trip", "Pack bags").unwrap();

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note_id.to_string());
    assert_eq!(json["title"], "Trip");
    assert_eq!(json["description"], "Pack bags");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}
