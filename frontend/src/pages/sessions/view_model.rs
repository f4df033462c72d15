use crate::api::{ApiClient, ApiError, MessageResponse, SessionResponse};
use crate::pages::sessions::repository;
use crate::state::auth::use_api;
use leptos::*;

#[derive(Clone)]
pub struct InvitePayload {
    pub session_id: String,
    pub emails: Vec<String>,
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct SessionsViewModel {
    pub api: ApiClient,
    pub sessions_resource: Resource<(), Result<Vec<SessionResponse>, ApiError>>,
    /// Which session's invite form is open, if any.
    pub invite_target: RwSignal<Option<String>>,
    pub invite_action: Action<InvitePayload, Result<MessageResponse, ApiError>>,
    pub invite_error: RwSignal<Option<ApiError>>,
    pub invite_success: RwSignal<Option<String>>,
}

impl SessionsViewModel {
    pub fn new() -> Self {
        let api = use_api();

        let api_for_sessions = api.clone();
        let sessions_resource = create_resource(
            || (),
            move |_| {
                let api = api_for_sessions.clone();
                async move { repository::fetch_sessions(&api).await }
            },
        );

        let api_for_invites = api.clone();
        let invite_action = create_action(move |payload: &InvitePayload| {
            let api = api_for_invites.clone();
            let payload = payload.clone();
            async move {
                repository::send_invites(
                    &api,
                    &payload.session_id,
                    payload.emails,
                    payload.message,
                )
                .await
            }
        });

        let invite_target = create_rw_signal(None::<String>);
        let invite_error = create_rw_signal(None::<ApiError>);
        let invite_success = create_rw_signal(None::<String>);
        create_effect(move |_| {
            if let Some(result) = invite_action.value().get() {
                match result {
                    Ok(response) => {
                        invite_error.set(None);
                        invite_success.set(Some(response.message));
                        invite_target.set(None);
                    }
                    Err(err) => {
                        invite_success.set(None);
                        invite_error.set(Some(err));
                    }
                }
            }
        });

        Self {
            api,
            sessions_resource,
            invite_target,
            invite_action,
            invite_error,
            invite_success,
        }
    }

    pub fn on_toggle_invite(&self) -> impl Fn(String) {
        let invite_target = self.invite_target;
        let invite_error = self.invite_error;
        let invite_success = self.invite_success;
        move |session_id: String| {
            invite_error.set(None);
            invite_success.set(None);
            invite_target.update(|target| {
                *target = match target.take() {
                    Some(current) if current == session_id => None,
                    _ => Some(session_id),
                };
            });
        }
    }
}

pub fn use_sessions_view_model() -> SessionsViewModel {
    match use_context::<SessionsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = SessionsViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invite_toggle_flips_the_target() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = use_sessions_view_model();
            leptos_reactive::suppress_resource_load(false);
            let toggle = vm.on_toggle_invite();

            toggle("s-1".into());
            assert_eq!(vm.invite_target.get_untracked().as_deref(), Some("s-1"));

            // Toggling the same session closes the form...
            toggle("s-1".into());
            assert!(vm.invite_target.get_untracked().is_none());

            // ...and toggling another one moves it.
            toggle("s-1".into());
            toggle("s-2".into());
            assert_eq!(vm.invite_target.get_untracked().as_deref(), Some("s-2"));
        });
    }
}
