use crate::api::AttendanceBackend;
use crate::db::session::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::submission::AbsenceSummary;
use chrono::NaiveDate;

/// Absentees of an hour: the local snapshot when it covers the requested
/// hour (or no hour was requested), the backend otherwise.
pub async fn load_summary<B>(
    backend: &B,
    session: &SessionStore,
    requested: Option<(i64, &str)>,
    today: NaiveDate,
) -> AppResult<AbsenceSummary>
where
    B: AttendanceBackend + ?Sized,
{
    let snapshot = session.absence_summary()?;

    match (requested, snapshot) {
        (None, Some(summary)) => Ok(summary),
        (Some((id, _)), Some(summary)) if summary.timetable_id == id => Ok(summary),
        (Some((id, subject)), _) => {
            let absent_students = backend.absentees(id).await?;
            Ok(AbsenceSummary {
                timetable_id: id,
                subject: subject.to_string(),
                date: today,
                absent_students,
            })
        }
        (None, None) => Err(AppError::InvalidInput(
            "No attendance data found. Use --timetable <id> to fetch absentees.".into(),
        )),
    }
}
