use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::session::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the session database and its schema
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    println!("⚙️  Initializing rollcall…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Session    : {}", &cfg.database);
    println!("🌐 Backend    : {}", cfg.backend_base());

    let session = SessionStore::open(&cfg.database)?;
    session.audit("init", "", &format!("Session store initialized at {}", &cfg.database));

    success("rollcall initialization completed!");
    Ok(())
}
