use crate::api::AttendanceBackend;
use crate::models::submission::SubmissionStatus;
use chrono::NaiveDate;
use futures_util::future::join_all;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

pub type StatusMap = BTreeMap<i64, SubmissionStatus>;

/// Ask the backend, for every id at once, whether attendance was already
/// recorded on `date`. Returns only after every query has finished.
///
/// A failing query resolves to `NotSubmitted` for its own id and does not
/// affect the others. Ids `<= 0` are not queried and stay `Unknown`.
pub async fn check_statuses<B>(backend: &B, ids: &[i64], date: NaiveDate) -> StatusMap
where
    B: AttendanceBackend + ?Sized,
{
    let unique: BTreeSet<i64> = ids.iter().copied().collect();
    let (valid, invalid): (Vec<i64>, Vec<i64>) = unique.into_iter().partition(|id| *id > 0);

    let queries = valid.into_iter().map(|id| async move {
        let status = match backend.check_attendance(id, date).await {
            Ok(true) => SubmissionStatus::Submitted,
            Ok(false) => SubmissionStatus::NotSubmitted,
            Err(e) => {
                warn!(timetable_id = id, error = %e, "status check failed");
                SubmissionStatus::NotSubmitted
            }
        };
        (id, status)
    });

    let mut out: StatusMap = join_all(queries).await.into_iter().collect();
    for id in invalid {
        out.insert(id, SubmissionStatus::Unknown);
    }
    out
}

/// Status of one id from a map, `Unknown` when absent.
pub fn status_of(map: &StatusMap, id: i64) -> SubmissionStatus {
    map.get(&id).copied().unwrap_or_default()
}
