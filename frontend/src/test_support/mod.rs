#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{OfferResponse, SessionResponse, UserResponse, UserRole};
    use crate::state::auth::AuthState;
    use chrono::{Duration, TimeZone, Utc};
    use leptos::*;

    pub fn student_user() -> UserResponse {
        UserResponse {
            id: "u-student".into(),
            email: "ana@example.com".into(),
            full_name: "Ana S.".into(),
            role: UserRole::Student,
            bio: None,
            subjects: vec!["algebra".into()],
            hourly_rate: None,
        }
    }

    pub fn tutor_user() -> UserResponse {
        UserResponse {
            id: "u-tutor".into(),
            email: "jane@example.com".into(),
            full_name: "Jane T.".into(),
            role: UserRole::Tutor,
            bio: Some("Ten years of physics tutoring".into()),
            subjects: vec!["physics".into(), "maths".into()],
            hourly_rate: Some(30.0),
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated: true,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn offer(id: &str, subject: &str) -> OfferResponse {
        OfferResponse {
            id: id.into(),
            subject: subject.into(),
            description: format!("Help with {}", subject),
            student_name: "Ana S.".into(),
            preferred_time: None,
            budget: Some(25.0),
            created_at: Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap(),
        }
    }

    pub fn session(id: &str, minutes_from_now: i64) -> SessionResponse {
        SessionResponse {
            id: id.into(),
            subject: "Algebra".into(),
            student_name: "Ana S.".into(),
            tutor_name: "Jane T.".into(),
            scheduled_time: Some(Utc::now() + Duration::minutes(minutes_from_now)),
            meeting_id: Some(format!("room-{}", id)),
        }
    }
}
