use chrono::{DateTime, Utc};

use crate::api::{ApiClient, ApiError, SessionResponse, SummaryResponse};
use crate::utils::join_window::{evaluate, SessionStatus};

pub async fn fetch_summary(api: &ApiClient) -> Result<SummaryResponse, ApiError> {
    api.get_dashboard_summary().await
}

pub async fn fetch_sessions(api: &ApiClient) -> Result<Vec<SessionResponse>, ApiError> {
    api.get_my_sessions().await
}

/// Sessions worth showing on the dashboard: everything that has not ended
/// yet, soonest first. Sessions without a schedule sort last so a broken
/// record can never bury a real one.
pub fn upcoming_sessions(
    mut sessions: Vec<SessionResponse>,
    now: DateTime<Utc>,
) -> Vec<SessionResponse> {
    sessions.retain(|session| evaluate(session.scheduled_time, now).status != SessionStatus::Ended);
    sessions.sort_by_key(|session| (session.scheduled_time.is_none(), session.scheduled_time));
    sessions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::session;
    use chrono::Utc;

    #[test]
    fn upcoming_filters_out_ended_sessions() {
        let now = Utc::now();
        let sessions = vec![session("old", -120), session("soon", 10), session("later", 90)];
        let upcoming = upcoming_sessions(sessions, now);
        let ids: Vec<&str> = upcoming.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["soon", "later"]);
    }

    #[test]
    fn sessions_without_a_schedule_sort_last() {
        let now = Utc::now();
        let mut unscheduled = session("mystery", 0);
        unscheduled.scheduled_time = None;
        let sessions = vec![unscheduled, session("soon", 5)];
        let upcoming = upcoming_sessions(sessions, now);
        let ids: Vec<&str> = upcoming.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["soon", "mystery"]);
    }

    #[test]
    fn in_progress_sessions_are_kept() {
        let now = Utc::now();
        let upcoming = upcoming_sessions(vec![session("live", -10)], now);
        assert_eq!(upcoming.len(), 1);
    }
}
