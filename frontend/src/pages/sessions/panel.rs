use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage};
use crate::pages::sessions::{
    components::{InviteForm, SessionList},
    view_model::use_sessions_view_model,
};
use crate::utils::time::use_minute_ticker;
use leptos::*;

#[component]
pub fn SessionsPage() -> impl IntoView {
    let vm = use_sessions_view_model();
    let now = use_minute_ticker();

    let invite_target = vm.invite_target;
    let invite_action = vm.invite_action;
    let invite_error = vm.invite_error;
    let invite_success = vm.invite_success;
    let on_invite = {
        let toggle = vm.on_toggle_invite();
        Callback::new(move |session_id| toggle(session_id))
    };
    let on_send = Callback::new(move |payload| {
        invite_action.dispatch(payload);
    });

    let sessions_resource = vm.sessions_resource;

    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Your sessions"</h2>
                {move || invite_success.get().map(|message| view! { <SuccessMessage message=message /> })}
                <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
                    <div class="px-4 py-5 sm:p-6">
                        {move || match sessions_resource.get() {
                            None => view! { <LoadingSpinner /> }.into_view(),
                            Some(Err(error)) => view! { <ErrorMessage message={error.error} /> }.into_view(),
                            Some(Ok(sessions)) => {
                                let (sessions, _) = create_signal(sessions);
                                let invite_form = Callback::new(move |session_id: String| {
                                    view! {
                                        <InviteForm
                                            session_id=session_id
                                            on_submit=on_send
                                            pending=invite_action.pending()
                                            error=invite_error
                                        />
                                    }
                                    .into_view()
                                });
                                view! {
                                    <SessionList
                                        sessions=sessions
                                        now=now
                                        on_invite=on_invite
                                        invite_target=invite_target
                                        invite_form=invite_form
                                    />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </Layout>
    }
}
