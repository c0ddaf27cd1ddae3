//! Backend seam. Controllers only talk to [`AttendanceBackend`]; the HTTP
//! implementation lives in [`http`], the payload decoding in [`wire`].

pub mod http;
pub mod wire;

use crate::errors::AppResult;
use crate::models::roster::{Student, StudentsOutcome};
use crate::models::submission::{SubmissionRequest, SubmissionResponse};
use crate::models::substitute::SubstituteSubject;
use crate::models::timetable::TimetableDay;
use async_trait::async_trait;
use chrono::NaiveDate;

pub use http::HttpBackend;

#[async_trait]
pub trait AttendanceBackend: Send + Sync {
    /// `Ok(false)` means the backend rejected the credentials.
    async fn authenticate(&self, staff_id: &str, password: &str) -> AppResult<bool>;

    async fn timetable(&self, staff_id: &str) -> AppResult<TimetableDay>;

    /// Whether attendance for `timetable_id` was already recorded on `date`.
    async fn check_attendance(&self, timetable_id: i64, date: NaiveDate) -> AppResult<bool>;

    async fn students(&self, timetable_id: i64) -> AppResult<StudentsOutcome>;

    async fn submit_attendance(&self, request: &SubmissionRequest)
    -> AppResult<SubmissionResponse>;

    async fn substitute_subjects(&self, staff_id: &str) -> AppResult<Vec<SubstituteSubject>>;

    async fn absentees(&self, timetable_id: i64) -> AppResult<Vec<Student>>;
}
