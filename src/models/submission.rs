use crate::models::roster::Student;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of "was attendance already recorded" for one timetable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Unknown,
    Submitted,
    NotSubmitted,
}

impl SubmissionStatus {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted)
    }
}

/// One line of the submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub rollno: String,
    pub status: String,
    pub name: String,
}

/// Body of the submit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub hour_id: i64,
    pub attendance: Vec<AttendanceRecord>,
}

/// What the backend answered to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub success: bool,
    pub processed: usize,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    pub processed: usize,
    pub total: usize,
}

/// Absentees of a submitted hour, kept in the session for the summary view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceSummary {
    #[serde(rename = "timetableId")]
    pub timetable_id: i64,
    pub subject: String,
    pub date: NaiveDate,
    #[serde(rename = "absentStudents")]
    pub absent_students: Vec<Student>,
}
