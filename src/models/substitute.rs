use chrono::NaiveTime;
use serde::Serialize;

/// A class the staff member may cover today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstituteSubject {
    pub timetable_id: i64,
    pub subject: String,
    pub paper_code: String,
    pub hour: String,
    pub start_time: Option<NaiveTime>,
}
