use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest, UserResponse};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Provides the shared `ApiClient` and the auth state. On the browser a
/// persisted token is restored and validated against the server before the
/// guards let anything render.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(|| {
        let api = ApiClient::new();
        provide_context(api.clone());
        api
    });
    let ctx = create_auth_context(api);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

fn create_auth_context(api: ApiClient) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(token) = persisted_token() {
            api.set_bearer_token(token);
            set_auth_state.update(|state| state.loading = true);
            spawn_local(async move {
                match api.get_me().await {
                    Ok(user) => set_auth_state.update(|state| {
                        state.user = Some(user);
                        state.is_authenticated = true;
                        state.loading = false;
                    }),
                    Err(_) => set_auth_state.update(|state| {
                        state.user = None;
                        state.is_authenticated = false;
                        state.loading = false;
                    }),
                }
            });
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = api;

    (auth_state, set_auth_state)
}

#[cfg(target_arch = "wasm32")]
fn persisted_token() -> Option<String> {
    crate::utils::storage::local_storage()
        .ok()?
        .get_item(crate::utils::storage::ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

fn persist_token(token: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Ok(storage) = crate::utils::storage::local_storage() {
        let _ = storage.set_item(crate::utils::storage::ACCESS_TOKEN_KEY, token);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = token;
}

fn forget_token() {
    #[cfg(target_arch = "wasm32")]
    if let Ok(storage) = crate::utils::storage::local_storage() {
        let _ = storage.remove_item(crate::utils::storage::ACCESS_TOKEN_KEY);
    }
}

pub async fn login_request(
    api: &ApiClient,
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let _ = set_auth_state.try_update(|state| state.loading = true);

    match api.login(request).await {
        Ok(response) => {
            persist_token(&response.access_token);
            let _ = set_auth_state.try_update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            let _ = set_auth_state.try_update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn register_request(
    api: &ApiClient,
    request: RegisterRequest,
) -> Result<UserResponse, ApiError> {
    api.register(request).await
}

pub async fn logout(
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = api.logout().await;
    forget_token();

    let _ = set_auth_state.try_update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api();

    create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let payload = request.clone();
        async move { login_request(&api, payload, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<UserResponse, ApiError>> {
    let api = use_api();

    create_action(move |request: &RegisterRequest| {
        let api = api.clone();
        let payload = request.clone();
        async move { register_request(&api, payload).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({
                "access_token": "tok-abc",
                "user": {
                    "id": "u1",
                    "email": "jane@example.com",
                    "full_name": "Jane T.",
                    "role": "tutor"
                }
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(200).json_body(json!({}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        login_request(
            &api,
            LoginRequest {
                email: "jane@example.com".into(),
                password: "secret".into(),
                device_label: Some("device-test".into()),
            },
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get_untracked();
        assert!(snapshot.is_authenticated);
        assert_eq!(
            snapshot.user.as_ref().map(|u| u.full_name.as_str()),
            Some("Jane T.")
        );
        assert!(api.bearer_token().is_some());

        logout(&api, set_state).await.unwrap();
        let snapshot = state.get_untracked();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(api.bearer_token().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_clears_the_loading_flag() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(json!({
                "error": "Invalid credentials",
                "code": "INVALID_CREDENTIALS"
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let err = login_request(
            &api,
            LoginRequest {
                email: "jane@example.com".into(),
                password: "wrong".into(),
                device_label: Some("device-test".into()),
            },
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, "INVALID_CREDENTIALS");
        let snapshot = state.get_untracked();
        assert!(!snapshot.loading);
        assert!(!snapshot.is_authenticated);
        runtime.dispose();
    }
}
