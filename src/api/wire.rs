//! Backend payloads and their decoding into the typed models.
//!
//! The PHP endpoints are loose: ids and roll numbers come as numbers or
//! strings, optional fields come as `null` or go missing. Everything is
//! normalised here; a payload that does not fit is a connectivity-class
//! failure, never a half-filled model.

use crate::errors::{AppError, AppResult};
use crate::models::roster::{Student, StudentsOutcome};
use crate::models::submission::SubmissionResponse;
use crate::models::substitute::SubstituteSubject;
use crate::models::timetable::{TimetableDay, TimetableEntry, UserProfile};
use crate::utils::time::parse_start_time;
use chrono::NaiveTime;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

// ---------------------------
// Lenient scalar helpers
// ---------------------------

fn scalar_to_string(v: Value) -> Result<Option<String>, String> {
    match v {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(format!("expected a scalar, found {other}")),
    }
}

fn lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?.unwrap_or(Value::Null);
    scalar_to_string(v)
        .map(|s| s.filter(|s| !s.trim().is_empty()))
        .map_err(de::Error::custom)
}

fn lenient_id<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("id out of range: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid id: {s:?}"))),
        other => Err(de::Error::custom(format!("invalid id: {other}"))),
    }
}

/// PHP truthiness for flags: `true`, non-zero numbers, `"1"` and `"true"`.
fn lenient_bool<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(d)?.unwrap_or(Value::Null) {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => {
            let s = s.trim();
            Ok(s == "1" || s.eq_ignore_ascii_case("true"))
        }
        other => Err(de::Error::custom(format!("invalid flag: {other}"))),
    }
}

fn lenient_count<'de, D>(d: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(d)?.unwrap_or(Value::Null) {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| de::Error::custom(format!("invalid count: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| de::Error::custom(format!("invalid count: {s:?}"))),
        other => Err(de::Error::custom(format!("invalid count: {other}"))),
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> AppResult<T> {
    serde_json::from_str(body)
        .map_err(|e| AppError::Connectivity(format!("invalid response from {endpoint}: {e}")))
}

/// Start times that are missing or unreadable become `None` and are logged.
fn start_time_of(id: i64, raw: Option<String>) -> Option<NaiveTime> {
    match raw {
        None => {
            warn!(timetable_id = id, "start time missing");
            None
        }
        Some(s) => {
            let parsed = parse_start_time(&s);
            if parsed.is_none() {
                warn!(timetable_id = id, start_time = %s, "malformed start time");
            }
            parsed
        }
    }
}

// ---------------------------
// GetTimetable
// ---------------------------

#[derive(Debug, Deserialize)]
struct TimetableRow {
    #[serde(deserialize_with = "lenient_id")]
    id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    hour: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    papername: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    papercode: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    start_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserRow {
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    role: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    photo_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimetablePayload {
    status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    message: Option<String>,
    #[serde(default)]
    data: Option<Vec<TimetableRow>>,
    #[serde(default)]
    user: Option<UserRow>,
    #[serde(default, deserialize_with = "lenient_string")]
    day_order: Option<String>,
}

pub fn decode_timetable(body: &str) -> AppResult<TimetableDay> {
    let p: TimetablePayload = decode("get_timetable", body)?;

    match p.status.as_str() {
        "holiday" => Ok(TimetableDay::Holiday {
            message: p.message.unwrap_or_else(|| "Today is a Holiday".into()),
        }),
        "success" => {
            let entries = p
                .data
                .unwrap_or_default()
                .into_iter()
                .map(|row| TimetableEntry {
                    id: row.id,
                    hour: row.hour.unwrap_or_default(),
                    paper_name: row.papername.unwrap_or_default(),
                    paper_code: row.papercode.unwrap_or_default(),
                    start_time: start_time_of(row.id, row.start_time),
                })
                .collect();

            let profile = p
                .user
                .map(|u| UserProfile {
                    name: u.name,
                    role: u.role,
                    photo_name: u.photo_name,
                })
                .unwrap_or_default();

            Ok(TimetableDay::Schedule {
                entries,
                profile,
                day_order: p.day_order,
            })
        }
        _ => Err(AppError::Backend(
            p.message.unwrap_or_else(|| "Error loading timetable".into()),
        )),
    }
}

// ---------------------------
// CheckAttendance
// ---------------------------

#[derive(Debug, Deserialize)]
struct CheckPayload {
    #[serde(default)]
    submitted: Value,
}

/// Only a literal `true` counts as submitted.
pub fn decode_check(body: &str) -> AppResult<bool> {
    let p: CheckPayload = decode("check_attendance", body)?;
    Ok(p.submitted == Value::Bool(true))
}

// ---------------------------
// GetStudents / GetAbsentees
// ---------------------------

#[derive(Debug, Deserialize)]
struct StudentRow {
    #[serde(default, alias = "rollno", deserialize_with = "lenient_string")]
    roll_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student {
            roll_number: r.roll_number.unwrap_or_default(),
            name: r.name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StudentsPayload {
    status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    message: Option<String>,
    #[serde(default)]
    data: Option<Vec<StudentRow>>,
}

pub fn decode_students(body: &str) -> AppResult<StudentsOutcome> {
    let p: StudentsPayload = decode("get_students_by_timetable", body)?;

    match p.status.as_str() {
        "success" => Ok(StudentsOutcome::Loaded(
            p.data
                .unwrap_or_default()
                .into_iter()
                .map(Student::from)
                .collect(),
        )),
        "closed" => Ok(StudentsOutcome::Closed(
            p.message
                .unwrap_or_else(|| "Attendance window closed.".into()),
        )),
        "upcoming" => Ok(StudentsOutcome::Upcoming(
            p.message
                .unwrap_or_else(|| "Attendance is not open yet.".into()),
        )),
        _ => Err(AppError::Backend(
            p.message
                .unwrap_or_else(|| "Failed to load students.".into()),
        )),
    }
}

#[derive(Debug, Deserialize)]
struct AbsenteesPayload {
    #[serde(default, deserialize_with = "lenient_bool")]
    success: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    message: Option<String>,
    #[serde(default)]
    students: Option<Vec<StudentRow>>,
}

pub fn decode_absentees(body: &str) -> AppResult<Vec<Student>> {
    let p: AbsenteesPayload = decode("get_absentees", body)?;
    if !p.success {
        return Err(AppError::Backend(
            p.message.unwrap_or_else(|| "Failed to fetch data".into()),
        ));
    }
    Ok(p.students
        .unwrap_or_default()
        .into_iter()
        .map(Student::from)
        .collect())
}

// ---------------------------
// SubmitAttendance
// ---------------------------

#[derive(Debug, Deserialize)]
struct SubmitPayload {
    #[serde(default, deserialize_with = "lenient_bool")]
    success: bool,
    #[serde(default, deserialize_with = "lenient_count")]
    processed: usize,
    #[serde(default, deserialize_with = "lenient_string")]
    message: Option<String>,
}

pub fn decode_submission(body: &str) -> AppResult<SubmissionResponse> {
    let p: SubmitPayload = decode("submit_attendance", body)?;
    Ok(SubmissionResponse {
        success: p.success,
        processed: p.processed,
        message: p.message,
    })
}

// ---------------------------
// GetSubstituteSubjects
// ---------------------------

#[derive(Debug, Deserialize)]
struct SubjectRow {
    #[serde(default = "zero_id", deserialize_with = "lenient_id")]
    timetable_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    papercode: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    hour: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    start_time: Option<String>,
}

fn zero_id() -> i64 {
    0
}

#[derive(Debug, Deserialize)]
struct SubjectsPayload {
    #[serde(default)]
    status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    message: Option<String>,
    #[serde(default)]
    data: Option<Vec<SubjectRow>>,
}

pub fn decode_subjects(body: &str) -> AppResult<Vec<SubstituteSubject>> {
    let p: SubjectsPayload = decode("get_subjects_by_staff", body)?;

    match (p.status.as_str(), p.data) {
        ("success", Some(rows)) => Ok(rows
            .into_iter()
            .map(|row| SubstituteSubject {
                timetable_id: row.timetable_id,
                subject: row.subject.unwrap_or_default(),
                paper_code: row.papercode.unwrap_or_default(),
                hour: row.hour.unwrap_or_default(),
                start_time: start_time_of(row.timetable_id, row.start_time),
            })
            .collect()),
        _ => Err(AppError::Backend(
            p.message
                .unwrap_or_else(|| "No substitute subjects found.".into()),
        )),
    }
}
