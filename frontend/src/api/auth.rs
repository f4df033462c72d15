use super::{
    client::{ensure_device_label, ApiClient},
    types::{
        ApiError, LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest, UserResponse,
    },
};

impl ApiClient {
    pub async fn login(&self, mut request: LoginRequest) -> Result<LoginResponse, ApiError> {
        if request.device_label.is_none() {
            request.device_label = Some(ensure_device_label());
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            let login_response: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))?;
            self.set_bearer_token(&login_response.access_token);
            Ok(login_response)
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse error: {}", e)))?;
            Err(error)
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/register", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse error: {}", e)))?;
            Err(error)
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/logout", base_url))
            .headers(headers)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)));

        // The local session ends regardless of what the server said.
        self.clear_bearer_token();

        let response = response?;
        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::UNAUTHORIZED {
            Ok(())
        } else {
            let error: Result<ApiError, _> = response.json().await;
            Err(error.unwrap_or_else(|_| ApiError::unknown("Logout failed")))
        }
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/users/me", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse error: {}", e)))?;
            Err(error)
        }
    }

    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/users/me", base_url))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse error: {}", e)))?;
            Err(error)
        }
    }
}
