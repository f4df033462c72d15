use chrono::{DateTime, Utc};
use leptos::*;

use crate::api::SessionResponse;
use crate::components::{
    empty_state::EmptyState, join_button::JoinSessionButton, status_badge::SessionStatusBadge,
};
use crate::utils::join_window::evaluate;
use crate::utils::time::format_schedule;

#[component]
pub fn SessionList(
    #[prop(into)] sessions: Signal<Vec<SessionResponse>>,
    #[prop(into)] now: Signal<DateTime<Utc>>,
    on_invite: Callback<String>,
    #[prop(into)] invite_target: Signal<Option<String>>,
    /// Renders the inline invite form for the targeted session.
    invite_form: Callback<String, View>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !sessions.get().is_empty()
            fallback=|| view! {
                <EmptyState
                    title="No sessions yet"
                    description="Once a tuition request is claimed it becomes a session."
                />
            }
        >
            <ul class="divide-y divide-border">
                <For
                    each=move || sessions.get()
                    key=|session| session.id.clone()
                    children=move |session: SessionResponse| {
                        let session_id = session.id.clone();
                        let (session, _) = create_signal(session);
                        let status = Signal::derive(move || {
                            evaluate(session.get().scheduled_time, now.get()).status
                        });
                        let invite_open = {
                            let session_id = session_id.clone();
                            Signal::derive(move || {
                                invite_target.get().as_deref() == Some(session_id.as_str())
                            })
                        };
                        let form_session_id = session_id.clone();
                        view! {
                            <li class="py-4 space-y-3">
                                <div class="flex items-center justify-between gap-4">
                                    <div>
                                        <p class="text-sm font-medium text-fg">{move || session.get().subject}</p>
                                        <p class="text-xs text-fg-muted">
                                            {move || format_schedule(session.get().scheduled_time)}
                                            " · "
                                            {move || session.get().student_name}
                                            " with "
                                            {move || session.get().tutor_name}
                                        </p>
                                    </div>
                                    <div class="flex items-center gap-3">
                                        <SessionStatusBadge status=status />
                                        <JoinSessionButton session=session now=now />
                                        <button
                                            class="text-sm text-action-primary-bg hover:underline"
                                            on:click={
                                                let session_id = session_id.clone();
                                                move |_| on_invite.call(session_id.clone())
                                            }
                                        >
                                            "Invite"
                                        </button>
                                    </div>
                                </div>
                                <Show when=move || invite_open.get()>
                                    {
                                        let form_session_id = form_session_id.clone();
                                        move || invite_form.call(form_session_id.clone())
                                    }
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::session;
    use crate::test_support::ssr::render_to_string;
    use chrono::Utc;

    fn render_list(
        sessions: Vec<crate::api::SessionResponse>,
        invite_target: Option<String>,
    ) -> String {
        render_to_string(move || {
            let (sessions, _) = create_signal(sessions);
            let (now, _) = create_signal(Utc::now());
            let (target, _) = create_signal(invite_target);
            view! {
                <SessionList
                    sessions=sessions
                    now=now
                    on_invite=Callback::new(|_| {})
                    invite_target=target
                    invite_form=Callback::new(|_| view! { <div>"invite-form"</div> }.into_view())
                />
            }
        })
    }

    #[test]
    fn renders_one_row_per_session() {
        let html = render_list(vec![session("s-1", 10), session("s-2", 120)], None);
        assert!(html.contains("Ready to join"));
        assert!(html.contains("Upcoming"));
        assert!(!html.contains("invite-form"));
    }

    #[test]
    fn opens_the_invite_slot_for_the_targeted_session() {
        let html = render_list(vec![session("s-1", 10)], Some("s-1".to_string()));
        assert!(html.contains("invite-form"));
    }

    #[test]
    fn shows_the_empty_state_without_sessions() {
        let html = render_list(Vec::new(), None);
        assert!(html.contains("No sessions yet"));
    }
}
