use super::{
    client::ApiClient,
    types::{ApiError, InvitationRequest, MessageResponse, SessionResponse, SummaryResponse},
};

impl ApiClient {
    /// Sessions the signed-in user takes part in, as student or tutor. This
    /// is the single source for "accepted" tuitions.
    pub async fn get_my_sessions(&self) -> Result<Vec<SessionResponse>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/sessions/me", base_url))
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

    pub async fn send_invites(
        &self,
        session_id: &str,
        request: InvitationRequest,
    ) -> Result<MessageResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/sessions/{}/invitations", base_url, session_id))
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

    pub async fn get_dashboard_summary(&self) -> Result<SummaryResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/dashboard/summary", base_url))
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
}
