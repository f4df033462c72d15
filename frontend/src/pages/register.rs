use crate::api::{ApiError, RegisterRequest, UserRole};
use crate::components::{
    error::InlineErrorMessage,
    forms::{PrimaryButton, TextField},
};
use crate::pages::login::utils::validate_credentials;
use crate::state::auth;
use leptos::{ev::SubmitEvent, *};

fn parse_role(value: &str) -> UserRole {
    match value {
        "tutor" => UserRole::Tutor,
        _ => UserRole::Student,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let full_name = create_rw_signal(String::new());
    let role = create_rw_signal("student".to_string());
    let error = create_rw_signal(None::<ApiError>);

    let register_action = auth::use_register_action();
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(err) = validate_credentials(&email_value, &password_value) {
            error.set(Some(err));
            return;
        }
        if full_name.get_untracked().trim().is_empty() {
            error.set(Some(ApiError::validation("Enter your full name.")));
            return;
        }
        error.set(None);
        register_action.dispatch(RegisterRequest {
            email: email_value.trim().to_string(),
            password: password_value,
            full_name: full_name.get_untracked().trim().to_string(),
            role: parse_role(&role.get_untracked()),
        });
    };

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-surface-elevated shadow rounded-lg p-8 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Create your account"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Already registered? " <a href="/login" class="text-action-primary-bg hover:underline">"Sign in"</a>
                    </p>
                </div>
                <InlineErrorMessage error={error} />
                <form class="space-y-4" on:submit=on_submit>
                    <TextField
                        label="Full name"
                        value=full_name
                        on_input=Callback::new(move |value| full_name.set(value))
                    />
                    <TextField
                        label="Email"
                        value=email
                        input_type="email"
                        on_input=Callback::new(move |value| email.set(value))
                    />
                    <TextField
                        label="Password"
                        value=password
                        input_type="password"
                        on_input=Callback::new(move |value| password.set(value))
                    />
                    <label class="block">
                        <span class="block text-sm font-medium text-fg-muted mb-1">"I am a"</span>
                        <select
                            class="block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="student" selected=move || role.get() == "student">"Student"</option>
                            <option value="tutor" selected=move || role.get() == "tutor">"Tutor"</option>
                        </select>
                    </label>
                    <PrimaryButton label="Create account" pending=pending pending_label="Creating..." />
                </form>
            </div>
        </div>
    }
}
