use crate::cli::commands::{http_backend, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::absent::load_summary;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::{format_long, today};
use crate::utils::table::{Column, Table};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Absent {
        timetable_id,
        subject,
    } = cmd
    {
        let session = open_session(cfg)?;
        session.require_staff_id()?;
        let backend = http_backend(cfg)?;

        let requested = timetable_id.map(|id| (id, subject.as_deref().unwrap_or("Subject")));
        let summary = load_summary(&backend, &session, requested, today()).await?;

        header(format!("Absentees - {}", summary.subject));
        println!("📅 {}", format_long(summary.date));
        println!("❌ Total absent: {}\n", summary.absent_students.len());

        if summary.absent_students.is_empty() {
            info("Everyone was present.");
            return Ok(());
        }

        let mut table = Table::new(vec![Column::new("Roll No", 10), Column::new("Name", 20)]);
        for s in &summary.absent_students {
            table.add_row(vec![
                if s.roll_number.is_empty() {
                    "N/A".into()
                } else {
                    s.roll_number.clone()
                },
                s.name.clone(),
            ]);
        }
        println!("{}", table.render());
    }

    Ok(())
}
