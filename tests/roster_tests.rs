use rollcall::core::roster::RosterEditor;
use rollcall::db::session::SessionStore;
use rollcall::errors::AppError;
use rollcall::models::roster::AttendanceStatus;
use std::cell::Cell;
use std::rc::Rc;

mod common;
use common::student;

fn three() -> RosterEditor {
    RosterEditor::from_students(vec![
        student("21CS01", "Asha"),
        student("21CS02", "Bruno"),
        student("21CS03", "Chiara"),
    ])
}

#[test]
fn test_students_start_present() {
    let editor = three();
    assert!(
        editor
            .entries()
            .iter()
            .all(|e| e.status == AttendanceStatus::Present)
    );
    assert_eq!(editor.present_count(), 3);
}

#[test]
fn test_set_status_touches_only_one_entry() {
    let mut editor = three();
    let before = editor.entries().to_vec();

    editor.set_status(1, AttendanceStatus::Absent);

    let after = editor.entries();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].status, AttendanceStatus::Absent);
    assert_eq!(after[1].roll_number, "21CS02");
}

#[test]
fn test_every_mutation_notifies() {
    let seen = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&seen);
    let mut editor = three().on_change(move |_| counter.set(counter.get() + 1));

    editor.set_status(0, AttendanceStatus::Absent);
    editor.set_status(0, AttendanceStatus::Absent);
    editor.toggle(2);

    assert_eq!(seen.get(), 3);
}

#[test]
fn test_order_is_preserved() {
    let mut editor = three();
    editor.toggle(0);
    editor.toggle(2);

    let rolls: Vec<&str> = editor
        .entries()
        .iter()
        .map(|e| e.roll_number.as_str())
        .collect();
    assert_eq!(rolls, ["21CS01", "21CS02", "21CS03"]);
}

#[test]
#[should_panic]
fn test_out_of_range_index_panics() {
    let mut editor = three();
    editor.set_status(3, AttendanceStatus::Absent);
}

#[test]
fn test_mark_absent_by_roll_number() {
    let mut editor = three();
    editor
        .mark_absent(&["21cs03".to_string(), "21CS01".to_string()])
        .unwrap();
    assert_eq!(editor.absent_count(), 2);
    assert_eq!(editor.entries()[1].status, AttendanceStatus::Present);
}

#[test]
fn test_unknown_roll_changes_nothing() {
    let mut editor = three();
    let err = editor
        .mark_absent(&["21CS01".to_string(), "99XX99".to_string()])
        .unwrap_err();
    assert!(matches!(err, AppError::UnknownRoll(r) if r == "99XX99"));
    assert_eq!(editor.absent_count(), 0);
}

#[test]
fn test_blank_roll_is_rejected() {
    let mut editor = RosterEditor::from_students(vec![
        student("", "Dario"),
        student("", "Elena"),
        student("21CS03", "Chiara"),
    ]);
    let err = editor
        .mark_absent(&["21CS03".to_string(), " ".to_string()])
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(editor.absent_count(), 0);
}

#[test]
fn test_shared_roll_is_rejected() {
    let mut editor = RosterEditor::from_students(vec![
        student("21CS01", "Asha"),
        student("21cs01", "Anna"),
        student("21CS02", "Bruno"),
    ]);
    let err = editor.mark_absent(&["21CS01".to_string()]).unwrap_err();
    assert!(err.to_string().contains("shared by several students"));
    assert_eq!(editor.absent_count(), 0);

    editor.mark_absent(&["21CS02".to_string()]).unwrap();
    assert_eq!(editor.entries()[2].status, AttendanceStatus::Absent);
}

#[test]
fn test_persist_hands_draft_to_session() {
    let session = SessionStore::in_memory().unwrap();
    let mut editor = three();
    editor.toggle(1);

    let draft = editor.persist(&session, 42, "Data Structures").unwrap();

    let stored = session.require_draft().unwrap();
    assert_eq!(stored.entries, draft.entries);
    assert_eq!(stored.captured_at.timestamp(), draft.captured_at.timestamp());
    assert_eq!(stored.timetable_id, 42);
    assert_eq!(stored.absent_count(), 1);
}

#[test]
fn test_empty_roster_is_not_persisted() {
    let session = SessionStore::in_memory().unwrap();
    let err = RosterEditor::from_students(vec![])
        .persist(&session, 1, "Empty")
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyRoster));
    assert!(session.draft().unwrap().is_none());
}
