use crate::api::ApiError;
use crate::components::{
    error::InlineErrorMessage,
    forms::{PrimaryButton, TextAreaField, TextField},
    layout::SuccessMessage,
};
use crate::pages::jobs::utils::validate_offer_form;
use leptos::{ev::SubmitEvent, *};

/// Form students use to put a new tuition request on the board.
#[component]
pub fn PostOfferForm(
    on_submit: Callback<crate::api::CreateOfferRequest>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] success: Signal<Option<String>>,
) -> impl IntoView {
    let subject = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let budget = create_rw_signal(String::new());
    let local_error = create_rw_signal(None::<ApiError>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match validate_offer_form(
            &subject.get_untracked(),
            &description.get_untracked(),
            &budget.get_untracked(),
        ) {
            Ok(request) => {
                local_error.set(None);
                on_submit.call(request);
            }
            Err(err) => local_error.set(Some(err)),
        }
    };

    let combined_error = Signal::derive(move || local_error.get().or_else(|| error.get()));

    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 space-y-4">
                <h3 class="text-lg leading-6 font-medium text-fg">"Post a tuition request"</h3>
                {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
                <InlineErrorMessage error=combined_error />
                <form class="space-y-4" on:submit=handle_submit>
                    <TextField
                        label="Subject"
                        value=subject
                        placeholder="e.g. Algebra"
                        on_input=Callback::new(move |value| subject.set(value))
                    />
                    <TextAreaField
                        label="What do you need help with?"
                        value=description
                        on_input=Callback::new(move |value| description.set(value))
                    />
                    <TextField
                        label="Budget per hour (optional)"
                        value=budget
                        placeholder="25"
                        on_input=Callback::new(move |value| budget.set(value))
                    />
                    <PrimaryButton label="Post request" pending=pending pending_label="Posting..." />
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn post_form_renders_all_fields() {
        let html = render_to_string(|| {
            let (pending, _) = create_signal(false);
            let (error, _) = create_signal(None::<ApiError>);
            let (success, _) = create_signal(None::<String>);
            view! {
                <PostOfferForm
                    on_submit=Callback::new(|_| {})
                    pending=pending
                    error=error
                    success=success
                />
            }
        });
        assert!(html.contains("Post a tuition request"));
        assert!(html.contains("Subject"));
        assert!(html.contains("Budget per hour (optional)"));
    }

    #[test]
    fn post_form_shows_the_success_notice() {
        let html = render_to_string(|| {
            let (pending, _) = create_signal(false);
            let (error, _) = create_signal(None::<ApiError>);
            let (success, _) = create_signal(Some("Your request is live.".to_string()));
            view! {
                <PostOfferForm
                    on_submit=Callback::new(|_| {})
                    pending=pending
                    error=error
                    success=success
                />
            }
        });
        assert!(html.contains("Your request is live."));
    }
}
