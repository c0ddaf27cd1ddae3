use crate::api::AttendanceBackend;
use crate::core::home::{Selection, subject_label};
use crate::core::reconcile::{check_statuses, status_of};
use crate::core::window::{Gate, gate};
use crate::errors::{AppError, AppResult};
use crate::models::substitute::SubstituteSubject;
use chrono::NaiveDateTime;

/// Classes a staff member covers for someone else.
pub struct SubstituteController<'a, B: ?Sized> {
    backend: &'a B,
    staff_id: String,
}

impl<'a, B> SubstituteController<'a, B>
where
    B: AttendanceBackend + ?Sized,
{
    pub fn new(backend: &'a B, staff_id: &str) -> Self {
        Self {
            backend,
            staff_id: staff_id.to_string(),
        }
    }

    pub async fn subjects(&self) -> AppResult<Vec<SubstituteSubject>> {
        self.backend.substitute_subjects(&self.staff_id).await
    }

    /// Intent: the user picked `subject`. Without a start time nothing is
    /// asked of the backend.
    pub async fn select_subject(
        &self,
        subject: &SubstituteSubject,
        now: NaiveDateTime,
    ) -> AppResult<Selection> {
        let label = subject_label(&subject.subject);

        if subject.start_time.is_none() {
            return Ok(Selection {
                timetable_id: subject.timetable_id,
                subject: label,
                gate: Gate::MissingStartTime,
            });
        }

        let statuses = check_statuses(self.backend, &[subject.timetable_id], now.date()).await;
        let status = status_of(&statuses, subject.timetable_id);

        Ok(Selection {
            timetable_id: subject.timetable_id,
            subject: label,
            gate: gate(now, subject.start_time, status),
        })
    }

    /// Same as [`select_subject`](Self::select_subject), looked up by id.
    pub async fn select_by_id(&self, timetable_id: i64, now: NaiveDateTime) -> AppResult<Selection> {
        let subjects = self.subjects().await?;
        let subject = subjects
            .iter()
            .find(|s| s.timetable_id == timetable_id)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Hour {timetable_id} is not among today's substitute subjects"
                ))
            })?;
        self.select_subject(subject, now).await
    }
}
