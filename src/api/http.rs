use crate::api::{AttendanceBackend, wire};
use crate::errors::{AppError, AppResult};
use crate::models::roster::{Student, StudentsOutcome};
use crate::models::submission::{SubmissionRequest, SubmissionResponse};
use crate::models::substitute::SubstituteSubject;
use crate::models::timetable::TimetableDay;
use crate::utils::date::to_backend_date;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;

const EP_LOGIN: &str = "log_credential_25.php";
const EP_TIMETABLE: &str = "get_timetable.php";
const EP_CHECK: &str = "check_attendance.php";
const EP_STUDENTS: &str = "get_students_by_timetable.php";
const EP_SUBMIT: &str = "submit_attendance.php";
const EP_SUBJECTS: &str = "get_subjects_by_staff.php";
const EP_ABSENTEES: &str = "get_absentees.php";

/// Client for the PHP endpoints under a single base URL.
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// GET returning the body; non-2xx statuses are connectivity errors.
    async fn get_text(&self, endpoint: &str, query: &[(&str, String)]) -> AppResult<String> {
        debug!(endpoint, "GET");
        let response = self
            .client
            .get(self.url_for(endpoint))
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Connectivity(format!(
                "Server responded with status {}",
                status.as_u16()
            )));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl AttendanceBackend for HttpBackend {
    async fn authenticate(&self, staff_id: &str, password: &str) -> AppResult<bool> {
        let body = self
            .get_text(
                EP_LOGIN,
                &[("fid", staff_id.to_string()), ("pass", password.to_string())],
            )
            .await?;
        Ok(body.trim() == "1")
    }

    async fn timetable(&self, staff_id: &str) -> AppResult<TimetableDay> {
        let body = self
            .get_text(EP_TIMETABLE, &[("staffid", staff_id.to_string())])
            .await?;
        wire::decode_timetable(&body)
    }

    async fn check_attendance(&self, timetable_id: i64, date: NaiveDate) -> AppResult<bool> {
        let body = self
            .get_text(
                EP_CHECK,
                &[
                    ("timetable_id", timetable_id.to_string()),
                    ("date", to_backend_date(date)),
                ],
            )
            .await?;
        wire::decode_check(&body)
    }

    async fn students(&self, timetable_id: i64) -> AppResult<StudentsOutcome> {
        let body = self
            .get_text(EP_STUDENTS, &[("timetable_id", timetable_id.to_string())])
            .await?;
        wire::decode_students(&body)
    }

    async fn submit_attendance(
        &self,
        request: &SubmissionRequest,
    ) -> AppResult<SubmissionResponse> {
        debug!(
            endpoint = EP_SUBMIT,
            hour_id = request.hour_id,
            records = request.attendance.len(),
            "POST"
        );
        let response = self
            .client
            .post(self.url_for(EP_SUBMIT))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // An error status with a readable body is a backend refusal; the
        // pipeline reports it together with the processed count.
        match wire::decode_submission(&body) {
            Ok(mut parsed) => {
                if !status.is_success() {
                    parsed.success = false;
                }
                Ok(parsed)
            }
            Err(_) if !status.is_success() => Err(AppError::Connectivity(format!(
                "Server responded with status {}",
                status.as_u16()
            ))),
            Err(e) => Err(e),
        }
    }

    async fn substitute_subjects(&self, staff_id: &str) -> AppResult<Vec<SubstituteSubject>> {
        let body = self
            .get_text(EP_SUBJECTS, &[("staffid", staff_id.to_string())])
            .await?;
        wire::decode_subjects(&body)
    }

    async fn absentees(&self, timetable_id: i64) -> AppResult<Vec<Student>> {
        let body = self
            .get_text(EP_ABSENTEES, &[("timetable_id", timetable_id.to_string())])
            .await?;
        wire::decode_absentees(&body)
    }
}
