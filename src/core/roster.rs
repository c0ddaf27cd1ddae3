use crate::db::session::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::draft::AttendanceDraft;
use crate::models::roster::{AttendanceStatus, RosterEntry, Student};
use chrono::{DateTime, Local};

type ChangeListener = Box<dyn FnMut(&[RosterEntry])>;

/// Ordered list of students with their marks for one class.
///
/// Insertion order is display order and is never changed. Every mutation
/// calls the change listener synchronously before returning.
pub struct RosterEditor {
    entries: Vec<RosterEntry>,
    listener: Option<ChangeListener>,
}

impl RosterEditor {
    /// Everyone starts present.
    pub fn from_students(students: Vec<Student>) -> Self {
        Self {
            entries: students.into_iter().map(RosterEntry::from).collect(),
            listener: None,
        }
    }

    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&[RosterEntry]) + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Panics
    /// If `index` does not reference an existing entry.
    pub fn set_status(&mut self, index: usize, status: AttendanceStatus) {
        self.entries[index].status = status;
        self.notify();
    }

    /// # Panics
    /// If `index` does not reference an existing entry.
    pub fn toggle(&mut self, index: usize) {
        let next = self.entries[index].status.toggled();
        self.set_status(index, next);
    }

    pub fn index_of(&self, roll_number: &str) -> Option<usize> {
        let wanted = roll_number.trim();
        self.entries
            .iter()
            .position(|e| e.roll_number.eq_ignore_ascii_case(wanted))
    }

    /// Mark the given roll numbers absent. Nothing changes if one is blank,
    /// unknown or shared by several students.
    pub fn mark_absent(&mut self, roll_numbers: &[String]) -> AppResult<()> {
        let mut indexes = Vec::with_capacity(roll_numbers.len());
        for roll in roll_numbers {
            let wanted = roll.trim();
            if wanted.is_empty() {
                return Err(AppError::InvalidInput(
                    "Empty roll number; use --interactive for students without one".into(),
                ));
            }

            let mut matches = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.roll_number.eq_ignore_ascii_case(wanted))
                .map(|(i, _)| i);
            let idx = matches
                .next()
                .ok_or_else(|| AppError::UnknownRoll(wanted.to_string()))?;
            if matches.next().is_some() {
                return Err(AppError::InvalidInput(format!(
                    "Roll number {wanted} is shared by several students; use --interactive"
                )));
            }
            indexes.push(idx);
        }

        for idx in indexes {
            self.set_status(idx, AttendanceStatus::Absent);
        }
        Ok(())
    }

    pub fn present_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == AttendanceStatus::Present)
            .count()
    }

    pub fn absent_count(&self) -> usize {
        self.len() - self.present_count()
    }

    pub fn into_draft(
        self,
        timetable_id: i64,
        subject: &str,
        captured_at: DateTime<Local>,
    ) -> AttendanceDraft {
        AttendanceDraft {
            timetable_id,
            subject: subject.to_string(),
            captured_at,
            entries: self.entries,
        }
    }

    /// Hand the roster over to the confirmation step.
    pub fn persist(
        self,
        session: &SessionStore,
        timetable_id: i64,
        subject: &str,
    ) -> AppResult<AttendanceDraft> {
        if self.is_empty() {
            return Err(AppError::EmptyRoster);
        }

        let draft = self.into_draft(timetable_id, subject, Local::now());
        session.save_draft(&draft)?;
        session.audit(
            "draft",
            &timetable_id.to_string(),
            &format!(
                "{}: {} present, {} absent",
                draft.subject,
                draft.present_count(),
                draft.absent_count()
            ),
        );
        Ok(draft)
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.entries);
        }
    }
}
