use chrono::{Local, TimeZone};
use rollcall::core::submit::{SubmissionPipeline, build_request};
use rollcall::db::session::SessionStore;
use rollcall::errors::AppError;
use rollcall::models::draft::AttendanceDraft;
use rollcall::models::roster::{AttendanceStatus, RosterEntry};
use rollcall::models::submission::SubmitReport;

mod common;
use common::MockBackend;

fn roster_entry(roll: &str, name: &str, status: AttendanceStatus) -> RosterEntry {
    RosterEntry {
        roll_number: roll.to_string(),
        name: name.to_string(),
        status,
    }
}

fn draft_of(entries: Vec<RosterEntry>) -> AttendanceDraft {
    AttendanceDraft {
        timetable_id: 12,
        subject: "Operating Systems".to_string(),
        captured_at: Local.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap(),
        entries,
    }
}

fn three_students() -> AttendanceDraft {
    draft_of(vec![
        roster_entry("101", "Asha", AttendanceStatus::Present),
        roster_entry("102", "Bruno", AttendanceStatus::Absent),
        roster_entry("103", "Chiara", AttendanceStatus::Present),
    ])
}

fn session_with(draft: &AttendanceDraft) -> SessionStore {
    let session = SessionStore::in_memory().unwrap();
    session.save_draft(draft).unwrap();
    session
}

#[tokio::test]
async fn test_full_success_clears_draft() {
    let draft = three_students();
    let session = session_with(&draft);
    let backend = MockBackend::new().answering_submit(true, 3);

    let report = SubmissionPipeline::new(&backend, &session)
        .submit(&draft)
        .await
        .unwrap();

    assert_eq!(
        report,
        SubmitReport {
            processed: 3,
            total: 3
        }
    );
    assert!(session.draft().unwrap().is_none());
}

#[tokio::test]
async fn test_success_keeps_absence_summary() {
    let draft = three_students();
    let session = session_with(&draft);
    let backend = MockBackend::new().answering_submit(true, 3);

    SubmissionPipeline::new(&backend, &session)
        .submit_pending()
        .await
        .unwrap();

    let summary = session.absence_summary().unwrap().unwrap();
    assert_eq!(summary.timetable_id, 12);
    assert_eq!(summary.absent_students.len(), 1);
    assert_eq!(summary.absent_students[0].roll_number, "102");
}

#[tokio::test]
async fn test_partial_processing_keeps_draft() {
    let draft = three_students();
    let session = session_with(&draft);
    let backend = MockBackend::new().answering_submit(true, 2);

    let err = SubmissionPipeline::new(&backend, &session)
        .submit(&draft)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::PartialSubmission {
            processed: 2,
            total: 3,
            ..
        }
    ));
    assert!(err.is_retryable());
    assert!(session.draft().unwrap().is_some());
}

#[tokio::test]
async fn test_backend_failure_flag_keeps_draft() {
    let draft = three_students();
    let session = session_with(&draft);
    let backend = MockBackend::new().answering_submit(false, 3);

    let err = SubmissionPipeline::new(&backend, &session)
        .submit(&draft)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::PartialSubmission { .. }));
    assert!(session.draft().unwrap().is_some());
}

#[tokio::test]
async fn test_empty_roster_makes_no_network_call() {
    let draft = draft_of(vec![]);
    let session = session_with(&draft);
    let backend = MockBackend::new().answering_submit(true, 0);

    let err = SubmissionPipeline::new(&backend, &session)
        .submit(&draft)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::EmptyRoster));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_transport_failure_keeps_draft_for_retry() {
    let draft = three_students();
    let session = session_with(&draft);
    let offline = MockBackend::new();

    let err = SubmissionPipeline::new(&offline, &session)
        .submit_pending()
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Connectivity(_)));
    assert!(session.draft().unwrap().is_some());

    // retry is a fresh invocation with the preserved draft
    let online = MockBackend::new().answering_submit(true, 3);
    let (_, report) = SubmissionPipeline::new(&online, &session)
        .submit_pending()
        .await
        .unwrap();
    assert_eq!(report.processed, 3);
    assert!(session.draft().unwrap().is_none());
}

#[tokio::test]
async fn test_accepted_submission_survives_store_failure() {
    let draft = three_students();
    let session = session_with(&draft);
    session.conn().execute_batch("DROP TABLE session").unwrap();
    let backend = MockBackend::new().answering_submit(true, 3);

    let report = SubmissionPipeline::new(&backend, &session)
        .submit(&draft)
        .await
        .unwrap();

    assert_eq!(report.processed, 3);
    assert_eq!(backend.calls_to("submit:"), 1);
}

#[tokio::test]
async fn test_missing_draft_is_reported() {
    let session = SessionStore::in_memory().unwrap();
    let backend = MockBackend::new().answering_submit(true, 3);

    let err = SubmissionPipeline::new(&backend, &session)
        .submit_pending()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NoDraft));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_payload_matches_roster_order_and_codes() {
    let draft = three_students();
    let session = session_with(&draft);
    let backend = MockBackend::new().answering_submit(true, 3);

    SubmissionPipeline::new(&backend, &session)
        .submit(&draft)
        .await
        .unwrap();

    let sent = backend.last_submission().unwrap();
    assert_eq!(sent, build_request(&draft));
    assert_eq!(sent.hour_id, 12);
    let codes: Vec<&str> = sent.attendance.iter().map(|r| r.status.as_str()).collect();
    assert_eq!(codes, ["P", "A", "P"]);
    assert_eq!(sent.attendance[1].rollno, "102");
    assert_eq!(sent.attendance[1].name, "Bruno");
}

#[test]
fn test_request_serializes_backend_field_names() {
    let json = serde_json::to_value(build_request(&three_students())).unwrap();
    assert_eq!(json["hour_id"], 12);
    assert_eq!(json["attendance"][0]["rollno"], "101");
    assert_eq!(json["attendance"][1]["status"], "A");
}
