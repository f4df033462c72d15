use crate::api::OfferResponse;
use crate::components::{empty_state::EmptyState, layout::LoadingSpinner};
use crate::state::offers::{NoticeKind, OffersState};
use crate::utils::time::format_schedule;
use leptos::*;

/// The live listing. Rows disappear as offers are claimed, locally or by
/// someone else over the push channel.
#[component]
pub fn OffersSection(
    #[prop(into)] state: Signal<OffersState>,
    #[prop(into)] can_claim: Signal<bool>,
    #[prop(into)] claim_pending: Signal<bool>,
    on_claim: Callback<String>,
    on_dismiss_notice: Callback<()>,
) -> impl IntoView {
    let offers = move || state.get().offers;
    let loading = move || state.get().loading;
    let notice = move || state.get().notice;

    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 space-y-4">
                <h3 class="text-lg leading-6 font-medium text-fg">"Open tuition requests"</h3>
                <Show when=move || notice().is_some()>
                    {move || notice().map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
                            NoticeKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
                        };
                        view! {
                            <div class=format!("border px-4 py-3 rounded flex items-center justify-between {}", class)>
                                <p class="text-sm">{notice.message}</p>
                                <button
                                    class="text-xs underline opacity-75 hover:opacity-100"
                                    on:click=move |_| on_dismiss_notice.call(())
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })}
                </Show>
                <Show when=loading>
                    <LoadingSpinner />
                </Show>
                <Show when=move || !loading() && offers().is_empty()>
                    <EmptyState
                        title="No open requests"
                        description="New tuition requests appear here the moment students post them."
                    />
                </Show>
                <Show when=move || !offers().is_empty()>
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr class="text-left text-xs font-medium text-fg-muted uppercase tracking-wide">
                                <th class="px-3 py-2">"Subject"</th>
                                <th class="px-3 py-2">"Student"</th>
                                <th class="px-3 py-2">"Preferred time"</th>
                                <th class="px-3 py-2">"Budget"</th>
                                <Show when=move || can_claim.get()>
                                    <th class="px-3 py-2"></th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=offers
                                key=|offer| offer.id.clone()
                                children=move |offer: OfferResponse| {
                                    let offer_id = offer.id.clone();
                                    view! {
                                        <tr class="text-sm text-fg">
                                            <td class="px-3 py-2">
                                                <p class="font-medium">{offer.subject.clone()}</p>
                                                <p class="text-xs text-fg-muted">{offer.description.clone()}</p>
                                            </td>
                                            <td class="px-3 py-2">{offer.student_name.clone()}</td>
                                            <td class="px-3 py-2">{format_schedule(offer.preferred_time)}</td>
                                            <td class="px-3 py-2">
                                                {offer.budget.map(|b| format!("${:.2}/h", b)).unwrap_or_else(|| "-".into())}
                                            </td>
                                            <Show when=move || can_claim.get()>
                                                {
                                                    let offer_id = offer_id.clone();
                                                    view! {
                                                        <td class="px-3 py-2 text-right">
                                                            <button
                                                                class="inline-flex items-center px-3 py-1.5 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                                                                disabled=move || claim_pending.get()
                                                                on:click={
                                                                    let offer_id = offer_id.clone();
                                                                    move |_| on_claim.call(offer_id.clone())
                                                                }
                                                            >
                                                                "Claim"
                                                            </button>
                                                        </td>
                                                    }
                                                }
                                            </Show>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::offers::OfferNotice;
    use crate::test_support::helpers::offer;
    use crate::test_support::ssr::render_to_string;

    fn render_with(state: OffersState, can_claim: bool) -> String {
        render_to_string(move || {
            let (state, _) = create_signal(state);
            let (pending, _) = create_signal(false);
            let (can_claim, _) = create_signal(can_claim);
            view! {
                <OffersSection
                    state=state
                    can_claim=can_claim
                    claim_pending=pending
                    on_claim=Callback::new(|_| {})
                    on_dismiss_notice=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn renders_rows_with_claim_buttons_for_tutors() {
        let state = OffersState {
            offers: vec![offer("o-1", "Algebra"), offer("o-2", "Physics")],
            ..Default::default()
        };
        let html = render_with(state, true);
        assert!(html.contains("Algebra"));
        assert!(html.contains("Physics"));
        assert!(html.contains("Claim"));
    }

    #[test]
    fn hides_claim_buttons_for_students() {
        let state = OffersState {
            offers: vec![offer("o-1", "Algebra")],
            ..Default::default()
        };
        let html = render_with(state, false);
        assert!(html.contains("Algebra"));
        assert!(!html.contains(">Claim<"));
    }

    #[test]
    fn shows_the_empty_state_when_nothing_is_open() {
        let html = render_with(OffersState::default(), true);
        assert!(html.contains("No open requests"));
    }

    #[test]
    fn shows_the_claimed_notice_banner() {
        let state = OffersState {
            notice: Some(OfferNotice {
                kind: crate::state::offers::NoticeKind::Info,
                message: "\"Physics\" was just claimed by Jane T.".into(),
            }),
            ..Default::default()
        };
        let html = render_with(state, true);
        assert!(html.contains("was just claimed by Jane T."));
        assert!(html.contains("Dismiss"));
    }
}
