use crate::api::{ApiError, SessionResponse};
use crate::components::{
    empty_state::EmptyState, join_button::JoinSessionButton, layout::LoadingSpinner,
    status_badge::SessionStatusBadge,
};
use crate::pages::dashboard::repository::upcoming_sessions;
use crate::utils::join_window::evaluate;
use crate::utils::time::{format_schedule, use_minute_ticker};
use leptos::*;

#[component]
pub fn UpcomingSessionsSection(
    sessions: Resource<(), Result<Vec<SessionResponse>, ApiError>>,
) -> impl IntoView {
    let now = use_minute_ticker();
    let upcoming = create_memo(move |_| {
        sessions
            .get()
            .map(|result| result.map(|sessions| upcoming_sessions(sessions, now.get())))
    });

    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 space-y-4">
                <h3 class="text-lg leading-6 font-medium text-fg">"Upcoming sessions"</h3>
                {move || match upcoming.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(error)) => view! {
                        <crate::components::layout::ErrorMessage message={error.error} />
                    }.into_view(),
                    Some(Ok(sessions)) if sessions.is_empty() => view! {
                        <EmptyState
                            title="Nothing scheduled"
                            description="Claimed requests turn into sessions and show up here."
                        />
                    }.into_view(),
                    Some(Ok(sessions)) => view! {
                        <ul class="divide-y divide-border">
                            <For
                                each=move || sessions.clone()
                                key=|session| session.id.clone()
                                children=move |session: SessionResponse| {
                                    let (session, _) = create_signal(session);
                                    let status = Signal::derive(move || {
                                        evaluate(session.get().scheduled_time, now.get()).status
                                    });
                                    view! {
                                        <li class="py-3 flex items-center justify-between gap-4">
                                            <div>
                                                <p class="text-sm font-medium text-fg">{move || session.get().subject}</p>
                                                <p class="text-xs text-fg-muted">
                                                    {move || format_schedule(session.get().scheduled_time)}
                                                    " · with "
                                                    {move || session.get().tutor_name}
                                                </p>
                                            </div>
                                            <div class="flex items-center gap-3">
                                                <SessionStatusBadge status=status />
                                                <JoinSessionButton session=session now=now />
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
