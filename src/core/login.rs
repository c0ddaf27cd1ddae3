use crate::api::AttendanceBackend;
use crate::db::session::SessionStore;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

static STAFF_ID_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("static pattern"));
static PASSWORD_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9!@#$%^&*]").expect("static pattern"));

pub fn sanitize_staff_id(raw: &str) -> String {
    STAFF_ID_STRIP.replace_all(raw.trim(), "").into_owned()
}

pub fn sanitize_password(raw: &str) -> String {
    PASSWORD_STRIP.replace_all(raw.trim(), "").into_owned()
}

pub struct LoginController<'a, B: ?Sized> {
    backend: &'a B,
    session: &'a SessionStore,
}

impl<'a, B> LoginController<'a, B>
where
    B: AttendanceBackend + ?Sized,
{
    pub fn new(backend: &'a B, session: &'a SessionStore) -> Self {
        Self { backend, session }
    }

    /// Returns the staff identifier stored in the session.
    pub async fn login(&self, staff_id: &str, password: &str) -> AppResult<String> {
        self.session.clear_staff_id()?;

        if staff_id.trim().is_empty() {
            return Err(AppError::InvalidInput("Please enter your Staff ID".into()));
        }
        if password.trim().is_empty() {
            return Err(AppError::InvalidInput("Please enter your password".into()));
        }

        let staff_id = sanitize_staff_id(staff_id);
        let password = sanitize_password(password);
        if staff_id.is_empty() {
            return Err(AppError::InvalidInput(
                "Staff ID may only contain letters and digits".into(),
            ));
        }

        if !self.backend.authenticate(&staff_id, &password).await? {
            self.session.audit("login", &staff_id, "rejected credentials");
            return Err(AppError::Authentication);
        }

        self.session.set_staff_id(&staff_id)?;
        self.session.audit("login", &staff_id, "logged in");
        info!(staff_id = %staff_id, "logged in");
        Ok(staff_id)
    }
}

/// Remove the staff identifier; returns the one that was stored.
pub fn logout(session: &SessionStore) -> AppResult<Option<String>> {
    let previous = session.staff_id()?;
    session.clear_staff_id()?;
    if let Some(id) = &previous {
        session.audit("logout", id, "logged out");
    }
    Ok(previous)
}
