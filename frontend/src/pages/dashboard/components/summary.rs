use crate::api::{ApiError, SummaryResponse};
use crate::components::cards::StatCard;
use leptos::*;

#[component]
pub fn SummarySection(
    summary: Resource<(), Result<SummaryResponse, ApiError>>,
) -> impl IntoView {
    let value = move |pick: fn(&SummaryResponse) -> i64| {
        summary
            .get()
            .and_then(|result| result.ok())
            .map(|summary| pick(&summary).to_string())
            .unwrap_or_else(|| "-".into())
    };

    let upcoming = Signal::derive(move || value(|s| s.upcoming_sessions));
    let open = Signal::derive(move || value(|s| s.open_offers));
    let completed = Signal::derive(move || value(|s| s.completed_sessions));

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            <StatCard title="Upcoming sessions" value=upcoming />
            <StatCard title="Open requests" value=open />
            <StatCard title="Completed sessions" value=completed />
        </div>
    }
}
