use crate::db::log::{LogEntry, load_entries};
use crate::db::session::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const OP_TARGET_MAX: usize = 40;

/// Color of the operation word.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "init" | "logout" => Colour::Fixed(244), // grey
        "draft" => Colour::Yellow,
        "submit" => Colour::Cyan,
        _ => Colour::Red,
    }
}

fn truncate_visible(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(session: &SessionStore) -> AppResult<()> {
        let entries = load_entries(session.conn())?;
        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        let rows: Vec<(&LogEntry, String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (e, date, truncate_visible(&op_target, OP_TARGET_MAX))
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, ot)| UnicodeWidthStr::width(ot.as_str()))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, date, op_target) in rows {
            // only the operation word is coloured; padding uses visible width
            let padding = " ".repeat(op_w.saturating_sub(UnicodeWidthStr::width(op_target.as_str())));
            let (op, rest) = op_target
                .split_once(' ')
                .map(|(o, r)| (o.to_string(), format!(" {r}")))
                .unwrap_or((op_target.clone(), String::new()));

            println!(
                "{:>id_w$}: {} | {}{}{} => {}",
                entry.id,
                date,
                color_for_operation(&entry.operation).paint(op),
                rest,
                padding,
                entry.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
