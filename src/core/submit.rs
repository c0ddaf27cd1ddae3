use crate::api::AttendanceBackend;
use crate::db::session::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::draft::AttendanceDraft;
use crate::models::submission::{AbsenceSummary, AttendanceRecord, SubmissionRequest, SubmitReport};
use tracing::{info, warn};

/// Backend shape of a draft: one record per student, in roster order.
pub fn build_request(draft: &AttendanceDraft) -> SubmissionRequest {
    SubmissionRequest {
        hour_id: draft.timetable_id,
        attendance: draft
            .entries
            .iter()
            .map(|e| AttendanceRecord {
                rollno: e.roll_number.clone(),
                status: e.status.code().to_string(),
                name: e.name.clone(),
            })
            .collect(),
    }
}

/// Sends a draft and owns the end of its lifetime.
///
/// The draft is removed from the session only after the backend confirmed
/// every record; on any failure it stays so the user can retry.
pub struct SubmissionPipeline<'a, B: ?Sized> {
    backend: &'a B,
    session: &'a SessionStore,
}

impl<'a, B> SubmissionPipeline<'a, B>
where
    B: AttendanceBackend + ?Sized,
{
    pub fn new(backend: &'a B, session: &'a SessionStore) -> Self {
        Self { backend, session }
    }

    /// Submit the draft currently held by the session store.
    pub async fn submit_pending(&self) -> AppResult<(AttendanceDraft, SubmitReport)> {
        let draft = self.session.require_draft()?;
        let report = self.submit(&draft).await?;
        Ok((draft, report))
    }

    pub async fn submit(&self, draft: &AttendanceDraft) -> AppResult<SubmitReport> {
        if draft.entries.is_empty() {
            return Err(AppError::EmptyRoster);
        }

        let total = draft.total();
        let request = build_request(draft);
        let response = self.backend.submit_attendance(&request).await?;

        if !response.success || response.processed < total {
            warn!(
                timetable_id = draft.timetable_id,
                processed = response.processed,
                total,
                "submission not fully accepted"
            );
            return Err(AppError::PartialSubmission {
                processed: response.processed,
                total,
                message: response
                    .message
                    .unwrap_or_else(|| "Failed to submit attendance".into()),
            });
        }

        // the backend already holds the records: a stale draft is only a warning
        if let Err(e) = self.session.clear_draft() {
            warn!(
                error = %e,
                timetable_id = draft.timetable_id,
                "could not clear submitted draft"
            );
        }
        info!(timetable_id = draft.timetable_id, total, "attendance submitted");

        let summary = AbsenceSummary {
            timetable_id: draft.timetable_id,
            subject: draft.subject.clone(),
            date: draft.captured_at.date_naive(),
            absent_students: draft.absentees(),
        };
        if let Err(e) = self.session.save_absence_summary(&summary) {
            warn!(error = %e, "could not keep absence summary");
        }

        self.session.audit(
            "submit",
            &draft.timetable_id.to_string(),
            &format!(
                "{}: processed {} of {} records",
                draft.subject, response.processed, total
            ),
        );

        Ok(SubmitReport {
            processed: response.processed,
            total,
        })
    }
}
