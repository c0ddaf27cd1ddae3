use crate::cli::commands::open_session;
use crate::config::Config;
use crate::core::login::logout;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    match logout(&session)? {
        Some(id) => success(format!("Logged out {id}.")),
        None => info("Nobody is logged in."),
    }
    Ok(())
}
