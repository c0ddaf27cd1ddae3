use crate::cli::commands::{http_backend, open_session};
use crate::config::Config;
use crate::core::submit::SubmissionPipeline;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub async fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    session.require_staff_id()?;
    let backend = http_backend(cfg)?;

    match SubmissionPipeline::new(&backend, &session).submit_pending().await {
        Ok((draft, report)) => {
            success(format!(
                "Attendance for {} submitted. Processed {} of {} records",
                draft.subject, report.processed, report.total
            ));
            if draft.absent_count() > 0 {
                info("Run `rollcall absent` to see the absentees.");
            }
            Ok(())
        }
        Err(e) => {
            if e.is_retryable() {
                warning("Your attendance is kept; run `rollcall submit` to try again.");
            }
            Err(e)
        }
    }
}
