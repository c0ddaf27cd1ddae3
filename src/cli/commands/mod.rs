pub mod absent;
pub mod config;
pub mod confirm;
pub mod home;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod submit;
pub mod substitute;
pub mod take;

use crate::api::{AttendanceBackend, HttpBackend};
use crate::cli::parser::MarkArgs;
use crate::config::Config;
use crate::core::home::Selection;
use crate::core::roster::RosterEditor;
use crate::core::window::Gate;
use crate::db::session::SessionStore;
use crate::errors::AppResult;
use crate::models::roster::{AttendanceStatus, RosterEntry, StudentsOutcome};
use crate::ui::messages::{Tone, info, notice, success};
use crate::utils::colors::{color_for_status, paint};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;
use std::io::{self, BufRead, Write};
use std::time::Duration;

pub(crate) fn open_session(cfg: &Config) -> AppResult<SessionStore> {
    SessionStore::open(&cfg.database)
}

pub(crate) fn http_backend(cfg: &Config) -> AppResult<HttpBackend> {
    HttpBackend::new(
        cfg.backend_base(),
        Duration::from_secs(cfg.request_timeout_secs),
    )
}

/// Read one trimmed line from stdin after printing `prompt`.
pub(crate) fn prompt_line(prompt: &str) -> AppResult<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut s = String::new();
    io::stdin().lock().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Print why a selection cannot go on to the roster.
pub(crate) fn show_gate(selection: &Selection) {
    match selection.gate {
        Gate::Proceed => {}
        Gate::AlreadySubmitted => notice(
            Tone::Success,
            "Already Submitted",
            format!("Attendance already submitted for {}.", selection.subject),
        ),
        Gate::MissingStartTime => notice(
            Tone::Danger,
            "Missing Time",
            "Start time is not available for this class.",
        ),
        Gate::NotYetOpen { opens_at } => notice(
            Tone::Warning,
            "Not Yet Open",
            format!("Attendance opens at {}", format_clock(opens_at)),
        ),
        Gate::Closed { closes_at } => notice(
            Tone::Muted,
            "Closed",
            format!("Attendance window closed at {}.", format_clock(closes_at)),
        ),
    }
}

pub(crate) fn roster_table(entries: &[RosterEntry]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Roll No", 10),
        Column::new("Name", 20),
        Column::new("Status", 9),
    ]);
    for (i, e) in entries.iter().enumerate() {
        let icon = match e.status {
            AttendanceStatus::Present => "✅",
            AttendanceStatus::Absent => "❌",
        };
        table.add_row(vec![
            (i + 1).to_string(),
            if e.roll_number.is_empty() {
                "N/A".to_string()
            } else {
                e.roll_number.clone()
            },
            e.name.clone(),
            format!("{icon} {}", paint(color_for_status(e.status), e.status.label())),
        ]);
    }
    table.render()
}

fn ask_marks(editor: &mut RosterEditor) -> AppResult<()> {
    info("Mark each student: Enter = present, a = absent, p = present.");
    for idx in 0..editor.len() {
        let entry = &editor.entries()[idx];
        let prompt = format!("{:>3}. {} {} [P/a]: ", idx + 1, entry.roll_number, entry.name);
        loop {
            let answer = prompt_line(&prompt)?;
            if answer.is_empty() {
                break;
            }
            match AttendanceStatus::from_code(&answer) {
                Some(status) => {
                    if status != editor.entries()[idx].status {
                        editor.set_status(idx, status);
                    }
                    break;
                }
                None => println!("   please answer P or A"),
            }
        }
    }
    Ok(())
}

/// Load the students of a gated selection, apply the marks and hand the
/// roster to the confirmation step.
pub(crate) async fn capture_roster<B>(
    backend: &B,
    session: &SessionStore,
    selection: &Selection,
    marks: &MarkArgs,
) -> AppResult<()>
where
    B: AttendanceBackend + ?Sized,
{
    let students = match backend.students(selection.timetable_id).await? {
        StudentsOutcome::Loaded(students) => students,
        StudentsOutcome::Closed(msg) => {
            notice(Tone::Muted, "Closed", msg);
            return Ok(());
        }
        StudentsOutcome::Upcoming(msg) => {
            notice(Tone::Warning, "Not Yet Open", msg);
            return Ok(());
        }
    };

    if students.is_empty() {
        info("No students found.");
        return Ok(());
    }

    let mut editor = RosterEditor::from_students(students);
    if marks.interactive {
        editor = editor.on_change(|entries| {
            let absent = entries
                .iter()
                .filter(|e| e.status == AttendanceStatus::Absent)
                .count();
            println!("   present {} · absent {}", entries.len() - absent, absent);
        });
        ask_marks(&mut editor)?;
    } else {
        editor.mark_absent(&marks.absent)?;
    }

    println!("Attendance - {}\n", selection.subject);
    println!("{}", roster_table(editor.entries()));

    let draft = editor.persist(session, selection.timetable_id, &selection.subject)?;
    success(format!(
        "Saved {} students ({} present, {} absent). Review with `rollcall confirm`, then `rollcall submit`.",
        draft.total(),
        draft.present_count(),
        draft.absent_count()
    ));
    Ok(())
}
