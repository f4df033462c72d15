use chrono::{DateTime, Utc};
use leptos::*;

use crate::api::SessionResponse;
use crate::utils::join_window::{evaluate, join_href, starts_in_label};

/// Join control for one session. Evaluates the join window against the shared
/// minute ticker; the actual join stays an explicit click on the anchor.
#[component]
pub fn JoinSessionButton(
    #[prop(into)] session: Signal<SessionResponse>,
    #[prop(into)] now: Signal<DateTime<Utc>>,
) -> impl IntoView {
    let window = create_memo(move |_| evaluate(session.get().scheduled_time, now.get()));
    let href = create_memo(move |_| join_href(&session.get()));

    view! {
        <Show
            when=move || window.get().can_join && href.get().is_some()
            fallback=move || {
                let window = window.get();
                let hint = if window.can_join {
                    // Joinable by time, but the room is not provisioned yet.
                    "Preparing room...".to_string()
                } else {
                    window
                        .minutes_until_start
                        .map(starts_in_label)
                        .unwrap_or_else(|| "Time to be confirmed".to_string())
                };
                view! {
                    <button
                        class="inline-flex items-center px-3 py-1.5 border border-border text-sm font-medium rounded-md text-fg-muted bg-surface-muted cursor-not-allowed"
                        disabled=true
                    >
                        {hint}
                    </button>
                }.into_view()
            }
        >
            <a
                href=move || href.get().unwrap_or_default()
                class="inline-flex items-center px-3 py-1.5 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
            >
                "Join session"
            </a>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::session;
    use crate::test_support::ssr::render_to_string;
    use chrono::Utc;

    #[test]
    fn joinable_session_renders_the_join_link() {
        let html = render_to_string(|| {
            let (session, _) = create_signal(session("s-1", 10));
            let (now, _) = create_signal(Utc::now());
            view! { <JoinSessionButton session=session now=now /> }
        });
        assert!(html.contains("Join session"));
        assert!(html.contains("/meetings/room-s-1/join"));
    }

    #[test]
    fn upcoming_session_shows_the_countdown_instead() {
        let html = render_to_string(|| {
            let (session, _) = create_signal(session("s-1", 60));
            let (now, _) = create_signal(Utc::now());
            view! { <JoinSessionButton session=session now=now /> }
        });
        assert!(!html.contains("Join session"));
        assert!(html.contains("starts in"));
    }

    #[test]
    fn joinable_session_without_a_room_waits_for_it() {
        let html = render_to_string(|| {
            let mut joinable = session("s-1", 5);
            joinable.meeting_id = None;
            let (session, _) = create_signal(joinable);
            let (now, _) = create_signal(Utc::now());
            view! { <JoinSessionButton session=session now=now /> }
        });
        assert!(!html.contains("Join session"));
        assert!(html.contains("Preparing room..."));
    }

    #[test]
    fn ended_session_is_not_joinable() {
        let html = render_to_string(|| {
            let (session, _) = create_signal(session("s-1", -90));
            let (now, _) = create_signal(Utc::now());
            view! { <JoinSessionButton session=session now=now /> }
        });
        assert!(!html.contains("Join session"));
        assert!(html.contains("started 90 min ago"));
    }
}
