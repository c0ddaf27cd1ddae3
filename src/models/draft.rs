use crate::models::roster::{AttendanceStatus, RosterEntry, Student};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Roster captured for one timetable entry, waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDraft {
    #[serde(rename = "timetableId")]
    pub timetable_id: i64,
    pub subject: String,
    #[serde(rename = "date")]
    pub captured_at: DateTime<Local>,
    #[serde(rename = "students")]
    pub entries: Vec<RosterEntry>,
}

impl AttendanceDraft {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn present_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == AttendanceStatus::Present)
            .count()
    }

    pub fn absent_count(&self) -> usize {
        self.total() - self.present_count()
    }

    pub fn absentees(&self) -> Vec<Student> {
        self.entries
            .iter()
            .filter(|e| e.status == AttendanceStatus::Absent)
            .map(|e| Student {
                roll_number: e.roll_number.clone(),
                name: e.name.clone(),
            })
            .collect()
    }
}
