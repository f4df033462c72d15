use chrono::{DateTime, Utc};

use crate::api::SessionResponse;
use crate::config;

/// Joining opens this many minutes before the scheduled start...
pub const JOIN_OPENS_MINUTES: i64 = 15;
/// ...and closes this many minutes after it.
pub const JOIN_CLOSES_MINUTES: i64 = 30;

/// Where a session sits relative to its scheduled start. Derived on demand,
/// never stored; as the clock advances it only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionStatus {
    Upcoming,
    Ready,
    Active,
    Ended,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "Upcoming",
            SessionStatus::Ready => "Ready to join",
            SessionStatus::Active => "In progress",
            SessionStatus::Ended => "Ended",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "bg-surface-muted text-fg-muted",
            SessionStatus::Ready => "bg-status-success-bg text-status-success-text",
            SessionStatus::Active => "bg-action-primary-bg text-action-primary-text",
            SessionStatus::Ended => "bg-surface-muted text-fg-subtle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinWindow {
    pub status: SessionStatus,
    pub can_join: bool,
    /// Whole minutes until the scheduled start; negative once it has passed.
    /// `None` when the session has no usable schedule.
    pub minutes_until_start: Option<i64>,
}

/// Decide whether a session can be joined right now. A session without a
/// usable schedule counts as upcoming and not joinable rather than an error.
///
/// The boundaries are deliberate: exactly 15 minutes early and exactly 30
/// minutes late are both still joinable.
pub fn evaluate(scheduled_time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> JoinWindow {
    let Some(scheduled) = scheduled_time else {
        return JoinWindow {
            status: SessionStatus::Upcoming,
            can_join: false,
            minutes_until_start: None,
        };
    };

    let minutes = scheduled.signed_duration_since(now).num_minutes();
    let (status, can_join) = if minutes > JOIN_OPENS_MINUTES {
        (SessionStatus::Upcoming, false)
    } else if minutes > 0 {
        (SessionStatus::Ready, true)
    } else if minutes >= -JOIN_CLOSES_MINUTES {
        (SessionStatus::Active, true)
    } else {
        (SessionStatus::Ended, false)
    };

    JoinWindow {
        status,
        can_join,
        minutes_until_start: Some(minutes),
    }
}

pub fn starts_in_label(minutes: i64) -> String {
    if minutes > 0 {
        format!("starts in {} min", minutes)
    } else if minutes == 0 {
        "starting now".to_string()
    } else {
        format!("started {} min ago", -minutes)
    }
}

/// Link to the server-hosted meeting room, once a room exists. Joining stays
/// an explicit user action on top of this.
pub fn join_href(session: &SessionResponse) -> Option<String> {
    session
        .meeting_id
        .as_ref()
        .map(|meeting_id| format!("{}/meetings/{}/join", config::api_base_url(), meeting_id))
}
