//! Persisted client session: the staff identifier, the in-flight attendance
//! draft and the last absence summary, stored as JSON values under fixed keys.
//!
//! Every command opens its own `SessionStore` and reads values fresh; nothing
//! is cached between commands.

use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::draft::AttendanceDraft;
use crate::models::submission::AbsenceSummary;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::warn;

pub const KEY_STAFF_ID: &str = "staffid";
pub const KEY_DRAFT: &str = "attendanceData";
pub const KEY_ABSENCE_SUMMARY: &str = "absentSummaryData";

pub struct SessionStore {
    pool: DbPool,
}

impl SessionStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::in_memory()?,
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM session WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn put_raw(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO session (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM session WHERE key = ?1", [key])?;
        Ok(())
    }

    // ---------------------------
    // Staff identifier
    // ---------------------------

    pub fn staff_id(&self) -> AppResult<Option<String>> {
        Ok(self.get_raw(KEY_STAFF_ID)?.filter(|s| !s.trim().is_empty()))
    }

    /// Gate used by every screen except login.
    pub fn require_staff_id(&self) -> AppResult<String> {
        self.staff_id()?.ok_or(AppError::SessionExpired)
    }

    pub fn set_staff_id(&self, staff_id: &str) -> AppResult<()> {
        self.put_raw(KEY_STAFF_ID, staff_id)
    }

    pub fn clear_staff_id(&self) -> AppResult<()> {
        self.remove(KEY_STAFF_ID)
    }

    // ---------------------------
    // Attendance draft
    // ---------------------------

    pub fn draft(&self) -> AppResult<Option<AttendanceDraft>> {
        match self.get_raw(KEY_DRAFT)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| AppError::MalformedDraft(e.to_string())),
        }
    }

    /// Like [`draft`](Self::draft) but a missing draft is an error.
    pub fn require_draft(&self) -> AppResult<AttendanceDraft> {
        self.draft()?.ok_or(AppError::NoDraft)
    }

    pub fn save_draft(&self, draft: &AttendanceDraft) -> AppResult<()> {
        let raw =
            serde_json::to_string(draft).map_err(|e| AppError::MalformedDraft(e.to_string()))?;
        self.put_raw(KEY_DRAFT, &raw)
    }

    pub fn clear_draft(&self) -> AppResult<()> {
        self.remove(KEY_DRAFT)
    }

    // ---------------------------
    // Absence summary
    // ---------------------------

    pub fn absence_summary(&self) -> AppResult<Option<AbsenceSummary>> {
        match self.get_raw(KEY_ABSENCE_SUMMARY)? {
            None => Ok(None),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(summary) => Ok(Some(summary)),
                Err(e) => {
                    warn!(error = %e, "discarding unreadable absence summary");
                    Ok(None)
                }
            },
        }
    }

    pub fn save_absence_summary(&self, summary: &AbsenceSummary) -> AppResult<()> {
        let raw = serde_json::to_string(summary)
            .map_err(|e| AppError::Config(format!("cannot encode absence summary: {e}")))?;
        self.put_raw(KEY_ABSENCE_SUMMARY, &raw)
    }

    // ---------------------------
    // Audit log (non blocking)
    // ---------------------------

    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = log::audit(&self.pool.conn, operation, target, message) {
            warn!(error = %e, operation, "failed to write internal log");
        }
    }
}
