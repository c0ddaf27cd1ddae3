use crate::cli::commands::{http_backend, open_session, prompt_line};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::login::LoginController;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { staff_id, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => prompt_line("Password: ")?,
        };

        let session = open_session(cfg)?;
        let backend = http_backend(cfg)?;

        let staff = LoginController::new(&backend, &session)
            .login(staff_id, &password)
            .await?;

        success(format!("Welcome, {staff}! Run `rollcall home` to see the open hours."));
    }

    Ok(())
}
