use crate::components::{
    error::InlineErrorMessage,
    forms::{PrimaryButton, TextField},
};
use crate::pages::login::view_model::use_login_view_model;
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let email = vm.email;
    let password = vm.password;
    let pending = vm.login_action.pending();
    let on_submit = vm.on_submit();

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-surface-elevated shadow rounded-lg p-8 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Sign in to TutorLink"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "New here? " <a href="/register" class="text-action-primary-bg hover:underline">"Create an account"</a>
                    </p>
                </div>
                <InlineErrorMessage error={vm.error} />
                <form class="space-y-4" on:submit=on_submit>
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
                    <PrimaryButton label="Sign in" pending=pending pending_label="Signing in..." />
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
    fn login_panel_renders_the_form() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(html.contains("Sign in to TutorLink"));
        assert!(html.contains("Email"));
        assert!(html.contains("Password"));
        assert!(html.contains("Create an account"));
    }
}
