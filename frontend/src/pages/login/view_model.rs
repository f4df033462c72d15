use super::utils::validate_credentials;
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::{ev::SubmitEvent, *};

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn on_submit(&self) -> impl Fn(SubmitEvent) {
        let email = self.email;
        let password = self.password;
        let error = self.error;
        let login_action = self.login_action;
        let pending = login_action.pending();

        move |ev: SubmitEvent| {
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
            error.set(None);
            login_action.dispatch(LoginRequest {
                email: email_value.trim().to_string(),
                password: password_value,
                device_label: None,
            });
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    password.set(String::new());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get_untracked().is_none());
            assert!(vm.email.get_untracked().is_empty());
            assert!(vm.password.get_untracked().is_empty());
        });
    }
}
