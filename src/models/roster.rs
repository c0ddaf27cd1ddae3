use serde::{Deserialize, Serialize};

/// Per-student mark. Serialized with the single-letter code the backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AttendanceStatus {
    #[default]
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "A")]
    Absent,
}

impl AttendanceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "P" | "PRESENT" => Some(AttendanceStatus::Present),
            "A" | "ABSENT" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Present,
        }
    }
}

/// A student as returned by the backend for a timetable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub roll_number: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub roll_number: String,
    pub name: String,
    pub status: AttendanceStatus,
}

impl From<Student> for RosterEntry {
    fn from(s: Student) -> Self {
        Self {
            roll_number: s.roll_number,
            name: s.name,
            status: AttendanceStatus::Present,
        }
    }
}

/// Result of loading the students of a timetable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentsOutcome {
    Loaded(Vec<Student>),
    /// Backend says the window already closed.
    Closed(String),
    /// Backend says the window is not open yet.
    Upcoming(String),
}
