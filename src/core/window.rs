//! Attendance window: a class may be marked from its scheduled start until
//! fifteen minutes later, both ends inclusive.

use crate::models::submission::SubmissionStatus;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

pub const WINDOW_MINUTES: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    NotYetOpen,
    Open,
    Closed,
}

impl WindowState {
    pub fn label(&self) -> &'static str {
        match self {
            WindowState::NotYetOpen => "not yet open",
            WindowState::Open => "open",
            WindowState::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceWindow {
    pub opens_at: NaiveDateTime,
    pub closes_at: NaiveDateTime,
}

impl AttendanceWindow {
    pub fn on(date: NaiveDate, start: NaiveTime) -> Self {
        let opens_at = date.and_time(start);
        Self {
            opens_at,
            closes_at: opens_at + Duration::minutes(WINDOW_MINUTES),
        }
    }

    /// Window on the calendar day of `now`. A missing start time falls back
    /// to midnight.
    pub fn for_day_of(now: NaiveDateTime, start: Option<NaiveTime>) -> Self {
        let start = start.unwrap_or_else(|| {
            warn!("no usable start time, evaluating window from 00:00:00");
            NaiveTime::MIN
        });
        Self::on(now.date(), start)
    }

    pub fn state_at(&self, now: NaiveDateTime) -> WindowState {
        if now < self.opens_at {
            WindowState::NotYetOpen
        } else if now <= self.closes_at {
            WindowState::Open
        } else {
            WindowState::Closed
        }
    }
}

/// Window state of a class starting at `start` on the day of `now`.
pub fn evaluate(now: NaiveDateTime, start: Option<NaiveTime>) -> WindowState {
    AttendanceWindow::for_day_of(now, start).state_at(now)
}

/// What happens when the user picks a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    AlreadySubmitted,
    MissingStartTime,
    NotYetOpen { opens_at: NaiveDateTime },
    Closed { closes_at: NaiveDateTime },
}

impl Gate {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Gate::Proceed)
    }
}

/// Submission status first, then the start time, then the window.
pub fn gate(now: NaiveDateTime, start: Option<NaiveTime>, status: SubmissionStatus) -> Gate {
    if status.is_submitted() {
        return Gate::AlreadySubmitted;
    }

    let Some(start) = start else {
        return Gate::MissingStartTime;
    };

    let window = AttendanceWindow::on(now.date(), start);
    match window.state_at(now) {
        WindowState::NotYetOpen => Gate::NotYetOpen {
            opens_at: window.opens_at,
        },
        WindowState::Closed => Gate::Closed {
            closes_at: window.closes_at,
        },
        WindowState::Open => Gate::Proceed,
    }
}
