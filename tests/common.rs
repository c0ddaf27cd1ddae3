#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rollcall::api::AttendanceBackend;
use rollcall::errors::{AppError, AppResult};
use rollcall::models::roster::{Student, StudentsOutcome};
use rollcall::models::submission::{SubmissionRequest, SubmissionResponse};
use rollcall::models::substitute::SubstituteSubject;
use rollcall::models::timetable::{TimetableDay, TimetableEntry, UserProfile};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

pub fn rc() -> Command {
    let mut cmd = cargo_bin_cmd!("rollcall");
    // nothing listens on the discard port: every network call fails fast
    cmd.args(["--backend", "http://127.0.0.1:9"]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
        .expect("valid datetime")
}

pub fn hms(t: &str) -> NaiveTime {
    NaiveTime::parse_from_str(t, "%H:%M:%S").expect("valid time")
}

pub fn day(d: &str) -> NaiveDate {
    NaiveDate::parse_from_str(d, "%Y-%m-%d").expect("valid date")
}

pub fn entry(id: i64, paper: &str, start: Option<&str>) -> TimetableEntry {
    TimetableEntry {
        id,
        hour: id.to_string(),
        paper_name: paper.to_string(),
        paper_code: format!("P{id:03}"),
        start_time: start.map(hms),
    }
}

pub fn student(roll: &str, name: &str) -> Student {
    Student {
        roll_number: roll.to_string(),
        name: name.to_string(),
    }
}

pub fn subject(id: i64, name: &str, start: Option<&str>) -> SubstituteSubject {
    SubstituteSubject {
        timetable_id: id,
        subject: name.to_string(),
        paper_code: format!("S{id:03}"),
        hour: "3".to_string(),
        start_time: start.map(hms),
    }
}

/// Scripted backend that records every call it receives.
#[derive(Default)]
pub struct MockBackend {
    pub credentials: Option<(String, String)>,
    pub timetable: Option<TimetableDay>,
    pub submitted: HashSet<i64>,
    pub failing_checks: HashSet<i64>,
    pub slow_checks: HashMap<i64, u64>,
    pub students: HashMap<i64, StudentsOutcome>,
    pub submit_response: Option<SubmissionResponse>,
    pub subjects: Option<Vec<SubstituteSubject>>,
    pub absentees: HashMap<i64, Vec<Student>>,
    calls: Mutex<Vec<String>>,
    last_submission: Mutex<Option<SubmissionRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(mut self, staff: &str, password: &str) -> Self {
        self.credentials = Some((staff.to_string(), password.to_string()));
        self
    }

    pub fn with_schedule(mut self, entries: Vec<TimetableEntry>) -> Self {
        self.timetable = Some(TimetableDay::Schedule {
            entries,
            profile: UserProfile {
                name: Some("Anna Rossi".into()),
                role: None,
                photo_name: None,
            },
            day_order: Some("III".into()),
        });
        self
    }

    pub fn with_holiday(mut self, message: &str) -> Self {
        self.timetable = Some(TimetableDay::Holiday {
            message: message.to_string(),
        });
        self
    }

    pub fn submitted(mut self, id: i64) -> Self {
        self.submitted.insert(id);
        self
    }

    pub fn failing_check(mut self, id: i64) -> Self {
        self.failing_checks.insert(id);
        self
    }

    pub fn slow_check(mut self, id: i64, millis: u64) -> Self {
        self.slow_checks.insert(id, millis);
        self
    }

    pub fn with_students(mut self, id: i64, outcome: StudentsOutcome) -> Self {
        self.students.insert(id, outcome);
        self
    }

    pub fn answering_submit(mut self, success: bool, processed: usize) -> Self {
        self.submit_response = Some(SubmissionResponse {
            success,
            processed,
            message: if success {
                Some("Attendance saved".into())
            } else {
                Some("Failed to submit attendance".into())
            },
        });
        self
    }

    pub fn with_subjects(mut self, subjects: Vec<SubstituteSubject>) -> Self {
        self.subjects = Some(subjects);
        self
    }

    pub fn with_absentees(mut self, id: i64, students: Vec<Student>) -> Self {
        self.absentees.insert(id, students);
        self
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn last_submission(&self) -> Option<SubmissionRequest> {
        self.last_submission.lock().unwrap().clone()
    }
}

fn offline() -> AppError {
    AppError::Connectivity("backend offline".into())
}

#[async_trait]
impl AttendanceBackend for MockBackend {
    async fn authenticate(&self, staff_id: &str, password: &str) -> AppResult<bool> {
        self.record(format!("authenticate:{staff_id}"));
        match &self.credentials {
            Some((s, p)) => Ok(s == staff_id && p == password),
            None => Err(offline()),
        }
    }

    async fn timetable(&self, staff_id: &str) -> AppResult<TimetableDay> {
        self.record(format!("timetable:{staff_id}"));
        self.timetable.clone().ok_or_else(offline)
    }

    async fn check_attendance(&self, timetable_id: i64, date: NaiveDate) -> AppResult<bool> {
        self.record(format!("check:{timetable_id}:{date}"));
        if let Some(ms) = self.slow_checks.get(&timetable_id) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        if self.failing_checks.contains(&timetable_id) {
            return Err(offline());
        }
        Ok(self.submitted.contains(&timetable_id))
    }

    async fn students(&self, timetable_id: i64) -> AppResult<StudentsOutcome> {
        self.record(format!("students:{timetable_id}"));
        self.students.get(&timetable_id).cloned().ok_or_else(offline)
    }

    async fn submit_attendance(
        &self,
        request: &SubmissionRequest,
    ) -> AppResult<SubmissionResponse> {
        self.record(format!("submit:{}", request.hour_id));
        *self.last_submission.lock().unwrap() = Some(request.clone());
        self.submit_response.clone().ok_or_else(offline)
    }

    async fn substitute_subjects(&self, staff_id: &str) -> AppResult<Vec<SubstituteSubject>> {
        self.record(format!("subjects:{staff_id}"));
        self.subjects.clone().ok_or_else(offline)
    }

    async fn absentees(&self, timetable_id: i64) -> AppResult<Vec<Student>> {
        self.record(format!("absentees:{timetable_id}"));
        self.absentees
            .get(&timetable_id)
            .cloned()
            .ok_or_else(offline)
    }
}
