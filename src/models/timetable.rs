use chrono::NaiveTime;
use serde::Serialize;

/// One scheduled class session ("hour") eligible for attendance capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableEntry {
    pub id: i64,
    pub hour: String,
    pub paper_name: String,
    pub paper_code: String,
    /// `None` when the backend sent no start time or an unparseable one.
    pub start_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub role: Option<String>,
    pub photo_name: Option<String>,
}

impl UserProfile {
    pub fn display_name<'a>(&'a self, staff_id: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(staff_id)
    }

    pub fn display_role(&self) -> &str {
        self.role.as_deref().unwrap_or("Staff")
    }

    pub fn avatar_url(&self, backend_base: &str) -> String {
        let photo = self.photo_name.as_deref().unwrap_or("default-avatar.png");
        format!("{}/uploads/{}", backend_base.trim_end_matches('/'), photo)
    }
}

/// Today's timetable as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableDay {
    Holiday {
        message: String,
    },
    Schedule {
        entries: Vec<TimetableEntry>,
        profile: UserProfile,
        day_order: Option<String>,
    },
}
