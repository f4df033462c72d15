use crate::api::ApiError;
use crate::components::{
    error::InlineErrorMessage,
    forms::{PrimaryButton, TextField},
};
use crate::pages::sessions::utils::parse_invite_emails;
use crate::pages::sessions::view_model::InvitePayload;
use leptos::{ev::SubmitEvent, *};

/// Inline invitation form for one session. Submitting emails a meeting link
/// to every address.
#[component]
pub fn InviteForm(
    #[prop(into)] session_id: String,
    on_submit: Callback<InvitePayload>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
) -> impl IntoView {
    let emails = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let local_error = create_rw_signal(None::<ApiError>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match parse_invite_emails(&emails.get_untracked()) {
            Ok(parsed) => {
                local_error.set(None);
                let note = message.get_untracked();
                on_submit.call(InvitePayload {
                    session_id: session_id.clone(),
                    emails: parsed,
                    message: if note.trim().is_empty() {
                        None
                    } else {
                        Some(note.trim().to_string())
                    },
                });
            }
            Err(err) => local_error.set(Some(err)),
        }
    };

    let combined_error = Signal::derive(move || local_error.get().or_else(|| error.get()));

    view! {
        <div class="bg-surface-muted border border-border rounded-lg p-4">
            <InlineErrorMessage error=combined_error />
            <form class="space-y-3" on:submit=handle_submit>
                <TextField
                    label="Invitees"
                    value=emails
                    placeholder="one@example.com, two@example.com"
                    on_input=Callback::new(move |value| emails.set(value))
                />
                <TextField
                    label="Message (optional)"
                    value=message
                    on_input=Callback::new(move |value| message.set(value))
                />
                <PrimaryButton label="Send invitations" pending=pending pending_label="Sending..." />
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn invite_form_renders_fields() {
        let html = render_to_string(|| {
            let (pending, _) = create_signal(false);
            let (error, _) = create_signal(None::<ApiError>);
            view! {
                <InviteForm
                    session_id="s-1"
                    on_submit=Callback::new(|_| {})
                    pending=pending
                    error=error
                />
            }
        });
        assert!(html.contains("Invitees"));
        assert!(html.contains("Send invitations"));
    }
}
