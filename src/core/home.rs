use crate::api::AttendanceBackend;
use crate::core::reconcile::{check_statuses, status_of};
use crate::core::window::{Gate, WindowState, evaluate, gate};
use crate::errors::{AppError, AppResult};
use crate::models::submission::SubmissionStatus;
use crate::models::timetable::{TimetableDay, TimetableEntry, UserProfile};
use chrono::NaiveDateTime;

/// One timetable entry as shown on the home listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourCard {
    pub entry: TimetableEntry,
    pub status: SubmissionStatus,
    pub window: WindowState,
}

impl HourCard {
    /// Window column text. An hour without a start time reads as missing,
    /// matching what selecting it reports.
    pub fn window_label(&self) -> &'static str {
        if self.entry.start_time.is_none() {
            "missing time"
        } else {
            self.window.label()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeView {
    Holiday {
        message: String,
    },
    Schedule {
        profile: UserProfile,
        day_order: Option<String>,
        cards: Vec<HourCard>,
    },
}

impl HomeView {
    /// Cards whose window is open right now, in timetable order. Hours
    /// without a start time are never listed.
    pub fn open_cards(&self) -> Vec<&HourCard> {
        match self {
            HomeView::Holiday { .. } => Vec::new(),
            HomeView::Schedule { cards, .. } => cards
                .iter()
                .filter(|c| c.window == WindowState::Open && c.entry.start_time.is_some())
                .collect(),
        }
    }
}

/// Outcome of picking a class, shared by the home and substitute flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub timetable_id: i64,
    pub subject: String,
    pub gate: Gate,
}

pub struct HomeController<'a, B: ?Sized> {
    backend: &'a B,
    staff_id: String,
}

impl<'a, B> HomeController<'a, B>
where
    B: AttendanceBackend + ?Sized,
{
    pub fn new(backend: &'a B, staff_id: &str) -> Self {
        Self {
            backend,
            staff_id: staff_id.to_string(),
        }
    }

    pub fn staff_id(&self) -> &str {
        &self.staff_id
    }

    /// Timetable, then the status of every entry, then the window states.
    pub async fn load(&self, now: NaiveDateTime) -> AppResult<HomeView> {
        match self.backend.timetable(&self.staff_id).await? {
            TimetableDay::Holiday { message } => Ok(HomeView::Holiday { message }),
            TimetableDay::Schedule {
                entries,
                profile,
                day_order,
            } => {
                let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
                let statuses = check_statuses(self.backend, &ids, now.date()).await;

                let cards = entries
                    .into_iter()
                    .map(|entry| HourCard {
                        status: status_of(&statuses, entry.id),
                        window: evaluate(now, entry.start_time),
                        entry,
                    })
                    .collect();

                Ok(HomeView::Schedule {
                    profile,
                    day_order,
                    cards,
                })
            }
        }
    }

    /// Intent: the user picked `timetable_id` from today's timetable.
    pub async fn select_entry(&self, timetable_id: i64, now: NaiveDateTime) -> AppResult<Selection> {
        let entry = match self.backend.timetable(&self.staff_id).await? {
            TimetableDay::Holiday { message } => return Err(AppError::InvalidInput(message)),
            TimetableDay::Schedule { entries, .. } => entries
                .into_iter()
                .find(|e| e.id == timetable_id)
                .ok_or_else(|| {
                    AppError::InvalidInput(format!(
                        "Hour {timetable_id} is not on today's timetable"
                    ))
                })?,
        };

        let statuses = check_statuses(self.backend, &[entry.id], now.date()).await;
        let status = status_of(&statuses, entry.id);

        Ok(Selection {
            timetable_id: entry.id,
            subject: subject_label(&entry.paper_name),
            gate: gate(now, entry.start_time, status),
        })
    }
}

/// Label carried into the roster; `Subject` when the backend sent none.
pub fn subject_label(name: &str) -> String {
    if name.trim().is_empty() {
        "Subject".to_string()
    } else {
        name.to_string()
    }
}
