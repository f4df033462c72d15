use std::cell::RefCell;
use std::rc::Rc;

use reqwest::{header::HeaderMap, Client, StatusCode};

use crate::api::types::ApiError;
use crate::config;

/// Thin wrapper over `reqwest::Client` that owns the bearer credential for
/// this session. The credential is held here, and the client is handed to
/// consumers through Leptos context, so nothing reads auth state ambiently.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    bearer: Rc<RefCell<Option<String>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            bearer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            bearer: Rc::new(RefCell::new(None)),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub fn set_bearer_token(&self, token: impl Into<String>) {
        *self.bearer.borrow_mut() = Some(token.into());
    }

    pub fn clear_bearer_token(&self) {
        *self.bearer.borrow_mut() = None;
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.bearer.borrow().clone()
    }

    pub(crate) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self
            .bearer_token()
            .ok_or_else(|| ApiError::unauthorized("Not signed in"))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    pub(crate) fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            self.clear_bearer_token();
            clear_persisted_session();
            redirect_to_login_if_needed();
        }
    }
}

fn clear_persisted_session() {
    #[cfg(target_arch = "wasm32")]
    if let Ok(storage) = crate::utils::storage::local_storage() {
        let _ = storage.remove_item(crate::utils::storage::ACCESS_TOKEN_KEY);
    }
}

fn redirect_to_login_if_needed() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == "/login" {
                return;
            }
        }
        let _ = location.set_href("/login");
    }
}

/// Stable per-browser label attached to login requests so the backend can
/// tell devices apart in its session listing.
pub(crate) fn ensure_device_label() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Ok(storage) = crate::utils::storage::local_storage() {
        if let Ok(Some(label)) = storage.get_item(crate::utils::storage::DEVICE_LABEL_KEY) {
            if !label.trim().is_empty() {
                return label;
            }
        }
        let label = format!("device-{}", uuid::Uuid::new_v4());
        let _ = storage.set_item(crate::utils::storage::DEVICE_LABEL_KEY, &label);
        return label;
    }
    format!("device-{}", uuid::Uuid::new_v4())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn bearer_token_is_shared_between_clones() {
        let api = ApiClient::new();
        let clone = api.clone();
        api.set_bearer_token("tok-1");
        assert_eq!(clone.bearer_token().as_deref(), Some("tok-1"));

        clone.clear_bearer_token();
        assert!(api.bearer_token().is_none());
    }

    #[test]
    fn auth_headers_require_a_token() {
        let api = ApiClient::new();
        let err = api.get_auth_headers().unwrap_err();
        assert_eq!(err.code, "UNAUTHORIZED");

        api.set_bearer_token("tok-2");
        let headers = api.get_auth_headers().unwrap();
        assert_eq!(
            headers.get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer tok-2"
        );
    }

    #[test]
    fn unauthorized_status_clears_the_token() {
        let api = ApiClient::new();
        api.set_bearer_token("tok-3");
        api.handle_unauthorized_status(StatusCode::UNAUTHORIZED);
        assert!(api.bearer_token().is_none());
    }

    #[test]
    fn device_labels_are_prefixed() {
        assert!(ensure_device_label().starts_with("device-"));
    }
}
