use crate::components::{error::InlineErrorMessage, layout::Layout};
use crate::pages::jobs::{
    components::{OffersSection, PostOfferForm},
    view_model::use_jobs_view_model,
};
use crate::state::auth::use_auth;
use crate::state::offers::dismiss_notice;
use leptos::*;

#[component]
pub fn JobsPage() -> impl IntoView {
    let vm = use_jobs_view_model();
    let (auth, _) = use_auth();
    let (offers_state, set_offers_state) = vm.state;

    let is_tutor = Signal::derive(move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.role.is_tutor())
            .unwrap_or(false)
    });

    let claim_action = vm.claim_action;
    let on_claim = Callback::new(move |offer_id: String| {
        claim_action.dispatch(offer_id);
    });
    let on_dismiss_notice = Callback::new(move |_| dismiss_notice(set_offers_state));

    let post_action = vm.post_action;
    let on_post = Callback::new(move |request| {
        post_action.dispatch(request);
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Job board"</h2>
                <InlineErrorMessage error={vm.claim_error} />
                <OffersSection
                    state=offers_state
                    can_claim=is_tutor
                    claim_pending=claim_action.pending()
                    on_claim=on_claim
                    on_dismiss_notice=on_dismiss_notice
                />
                <Show when=move || !is_tutor.get()>
                    <PostOfferForm
                        on_submit=on_post
                        pending=post_action.pending()
                        error={vm.post_error}
                        success={vm.post_success}
                    />
                </Show>
            </div>
        </Layout>
    }
}
