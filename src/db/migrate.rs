use rusqlite::{Connection, OptionalExtension, Result};
use tracing::debug;

/// Current schema version stored in `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 1;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the key/value `session` table exists.
fn ensure_session_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn user_version(conn: &Connection) -> Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Bring the schema to `SCHEMA_VERSION`. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let version = user_version(conn)?;
    if version >= SCHEMA_VERSION
        && table_exists(conn, "session")?
        && table_exists(conn, "log")?
    {
        return Ok(());
    }

    ensure_session_table(conn)?;
    ensure_log_table(conn)?;
    conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    debug!(from = version, to = SCHEMA_VERSION, "session schema migrated");
    Ok(())
}
