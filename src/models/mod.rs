pub mod draft;
pub mod roster;
pub mod submission;
pub mod substitute;
pub mod timetable;
