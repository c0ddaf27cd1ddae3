use crate::cli::commands::{http_backend, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::home::{HomeController, HomeView, HourCard};
use crate::errors::AppResult;
use crate::ui::messages::{Tone, header, info, notice};
use crate::utils::colors::{RED, color_for_window, paint};
use crate::utils::date::{format_long, now_local};
use crate::utils::table::{Column, Table};

fn or_na(s: &str) -> String {
    if s.trim().is_empty() {
        "N/A".to_string()
    } else {
        s.to_string()
    }
}

fn cards_table(cards: &[&HourCard]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Hour", 4),
        Column::new("Paper Name", 18),
        Column::new("Paper Code", 10),
        Column::new("Start", 8),
        Column::new("Window", 12),
        Column::new("Attendance", 17),
    ]);

    for card in cards {
        let e = &card.entry;
        table.add_row(vec![
            e.id.to_string(),
            or_na(&e.hour),
            or_na(&e.paper_name),
            or_na(&e.paper_code),
            e.start_time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_else(|| "--:--".into()),
            if e.start_time.is_none() {
                paint(RED, card.window_label())
            } else {
                paint(color_for_window(card.window), card.window_label())
            },
            if card.status.is_submitted() {
                "Already Submitted".into()
            } else {
                format!("rollcall take {}", e.id)
            },
        ]);
    }
    table.render()
}

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Home { all } = cmd {
        let session = open_session(cfg)?;
        let staff_id = session.require_staff_id()?;
        let backend = http_backend(cfg)?;

        let now = now_local();
        let view = HomeController::new(&backend, &staff_id).load(now).await?;

        match &view {
            HomeView::Holiday { message } => {
                notice(Tone::Success, "Holiday", message);
            }
            HomeView::Schedule {
                profile,
                day_order,
                cards,
            } => {
                header("Current Attendance");
                println!(
                    "👤 {} ({})  {}",
                    profile.display_name(&staff_id),
                    profile.display_role(),
                    profile.avatar_url(cfg.backend_base())
                );
                println!("📅 {}", format_long(now.date()));
                if let Some(order) = day_order {
                    println!("🗓️  Day Order: {order}");
                }
                println!();

                let shown: Vec<&HourCard> = if *all {
                    cards.iter().collect()
                } else {
                    view.open_cards()
                };

                if shown.is_empty() {
                    info(if *all {
                        "No classes on today's timetable."
                    } else {
                        "No classes currently open for attendance."
                    });
                } else {
                    println!("{}", cards_table(&shown));
                }
            }
        }
    }

    Ok(())
}
