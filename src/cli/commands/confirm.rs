use crate::cli::commands::{open_session, roster_table};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, RED, paint};
use crate::utils::date::format_long;

/// Print the pending draft with its counts.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    session.require_staff_id()?;
    let draft = session.require_draft()?;

    header(&draft.subject);
    println!("📅 {}", format_long(draft.captured_at.date_naive()));
    println!("👥 Total students: {}\n", draft.total());
    println!("{}", roster_table(&draft.entries));
    println!(
        "{}   {}",
        paint(GREEN, &format!("Present: {}", draft.present_count())),
        paint(RED, &format!("Absent: {}", draft.absent_count()))
    );
    println!("\nRun `rollcall submit` to send it.");

    Ok(())
}
