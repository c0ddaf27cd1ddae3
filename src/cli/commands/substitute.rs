use crate::cli::commands::{capture_roster, http_backend, open_session, show_gate};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::substitute::SubstituteController;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::{format_long, now_local};
use crate::utils::table::{Column, Table};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Substitute { select, marks } = cmd {
        let session = open_session(cfg)?;
        let staff_id = session.require_staff_id()?;
        let backend = http_backend(cfg)?;
        let controller = SubstituteController::new(&backend, &staff_id);

        let now = now_local();

        if let Some(timetable_id) = select {
            let selection = controller.select_by_id(*timetable_id, now).await?;
            if !selection.gate.is_proceed() {
                show_gate(&selection);
                return Ok(());
            }
            return capture_roster(&backend, &session, &selection, marks).await;
        }

        let subjects = controller.subjects().await?;

        header("Substitute Subjects");
        println!("📅 {}\n", format_long(now.date()));

        if subjects.is_empty() {
            info("No substitute subjects found for today.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("Subject", 18),
            Column::new("Paper Code", 10),
            Column::new("Hour", 4),
            Column::new("Start Time", 10),
        ]);
        for s in &subjects {
            table.add_row(vec![
                s.timetable_id.to_string(),
                if s.subject.is_empty() {
                    "Unknown Subject".into()
                } else {
                    s.subject.clone()
                },
                if s.paper_code.is_empty() {
                    "N/A".into()
                } else {
                    s.paper_code.clone()
                },
                if s.hour.is_empty() {
                    "N/A".into()
                } else {
                    s.hour.clone()
                },
                s.start_time
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default(),
            ]);
        }
        println!("{}", table.render());
        info("Take attendance with `rollcall substitute --select <ID>`.");
    }

    Ok(())
}
