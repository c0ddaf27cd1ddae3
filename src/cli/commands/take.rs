use crate::cli::commands::{capture_roster, http_backend, open_session, show_gate};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::home::HomeController;
use crate::errors::AppResult;
use crate::utils::date::now_local;

/// Pick one of today's hours and record its roster.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Take {
        timetable_id,
        marks,
    } = cmd
    {
        let session = open_session(cfg)?;
        let staff_id = session.require_staff_id()?;
        let backend = http_backend(cfg)?;

        let selection = HomeController::new(&backend, &staff_id)
            .select_entry(*timetable_id, now_local())
            .await?;

        if !selection.gate.is_proceed() {
            show_gate(&selection);
            return Ok(());
        }

        capture_roster(&backend, &session, &selection, marks).await?;
    }

    Ok(())
}
