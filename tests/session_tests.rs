use chrono::{Local, TimeZone};
use rollcall::db::log::load_entries;
use rollcall::db::session::{KEY_ABSENCE_SUMMARY, KEY_DRAFT, SessionStore};
use rollcall::errors::AppError;
use rollcall::models::draft::AttendanceDraft;
use rollcall::models::roster::{AttendanceStatus, RosterEntry};

mod common;
use common::setup_test_db;

fn sample_draft() -> AttendanceDraft {
    AttendanceDraft {
        timetable_id: 5,
        subject: "Geography".into(),
        captured_at: Local.with_ymd_and_hms(2026, 10, 19, 10, 2, 0).unwrap(),
        entries: vec![RosterEntry {
            roll_number: "11".into(),
            name: "Elena".into(),
            status: AttendanceStatus::Absent,
        }],
    }
}

#[test]
fn test_staff_id_lifecycle() {
    let session = SessionStore::in_memory().unwrap();
    assert!(matches!(
        session.require_staff_id(),
        Err(AppError::SessionExpired)
    ));

    session.set_staff_id("ST01").unwrap();
    session.set_staff_id("ST02").unwrap();
    assert_eq!(session.require_staff_id().unwrap(), "ST02");

    session.clear_staff_id().unwrap();
    assert!(session.staff_id().unwrap().is_none());
}

#[test]
fn test_blank_staff_id_counts_as_logged_out() {
    let session = SessionStore::in_memory().unwrap();
    session.set_staff_id("   ").unwrap();
    assert!(matches!(
        session.require_staff_id(),
        Err(AppError::SessionExpired)
    ));
}

#[test]
fn test_draft_uses_backend_field_names() {
    let session = SessionStore::in_memory().unwrap();
    session.save_draft(&sample_draft()).unwrap();

    let raw = session.get_raw(KEY_DRAFT).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["timetableId"], 5);
    assert_eq!(json["subject"], "Geography");
    assert_eq!(json["students"][0]["status"], "A");
    assert!(json["date"].is_string());
}

#[test]
fn test_malformed_draft_is_reported() {
    let session = SessionStore::in_memory().unwrap();
    session.put_raw(KEY_DRAFT, "{not json").unwrap();

    assert!(matches!(session.draft(), Err(AppError::MalformedDraft(_))));
    assert!(matches!(
        session.require_draft(),
        Err(AppError::MalformedDraft(_))
    ));
}

#[test]
fn test_missing_draft() {
    let session = SessionStore::in_memory().unwrap();
    assert!(session.draft().unwrap().is_none());
    assert!(matches!(session.require_draft(), Err(AppError::NoDraft)));
}

#[test]
fn test_unreadable_summary_is_dropped() {
    let session = SessionStore::in_memory().unwrap();
    session.put_raw(KEY_ABSENCE_SUMMARY, "[]").unwrap();
    assert!(session.absence_summary().unwrap().is_none());
}

#[test]
fn test_session_survives_reopen() {
    let path = setup_test_db("session_reopen");
    {
        let session = SessionStore::open(&path).unwrap();
        session.set_staff_id("ST09").unwrap();
        session.save_draft(&sample_draft()).unwrap();
    }

    let session = SessionStore::open(&path).unwrap();
    assert_eq!(session.require_staff_id().unwrap(), "ST09");
    assert_eq!(session.require_draft().unwrap().entries, sample_draft().entries);
}

#[test]
fn test_audit_lines_are_ordered() {
    let session = SessionStore::in_memory().unwrap();
    session.audit("login", "ST01", "logged in");
    session.audit("logout", "ST01", "logged out");

    let entries = load_entries(session.conn()).unwrap();
    let ops: Vec<&str> = entries.iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, ["login", "logout"]);
    assert_eq!(entries[0].target, "ST01");
}
