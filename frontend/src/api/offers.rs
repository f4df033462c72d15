use reqwest::StatusCode;

use super::{
    client::ApiClient,
    types::{ApiError, CreateOfferRequest, MessageResponse, OfferResponse},
};

impl ApiClient {
    /// All offers currently open for claiming, visible to the signed-in user.
    pub async fn get_open_offers(&self) -> Result<Vec<OfferResponse>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/offers/open", base_url))
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

    pub async fn create_offer(
        &self,
        request: CreateOfferRequest,
    ) -> Result<OfferResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/offers", base_url))
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

    /// First successful claim wins; the server answers 409 for everyone else.
    pub async fn claim_offer(&self, offer_id: &str) -> Result<MessageResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/offers/{}/claim", base_url, offer_id))
            .headers(headers)
            .json(&serde_json::json!({}))
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
            let error: Result<ApiError, _> = response.json().await;
            Err(error.unwrap_or_else(|_| {
                if status == StatusCode::CONFLICT {
                    ApiError::already_claimed("Offer was already claimed")
                } else {
                    ApiError::request_failed(format!("Claim failed with status {}", status))
                }
            }))
        }
    }
}
