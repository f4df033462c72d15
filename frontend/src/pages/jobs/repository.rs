use crate::api::{ApiClient, ApiError, CreateOfferRequest, OfferResponse};

pub async fn post_offer(
    api: &ApiClient,
    request: CreateOfferRequest,
) -> Result<OfferResponse, ApiError> {
    api.create_offer(request).await
}
