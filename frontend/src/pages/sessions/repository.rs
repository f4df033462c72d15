use crate::api::{
    ApiClient, ApiError, InvitationRequest, MessageResponse, SessionResponse,
};

pub async fn fetch_sessions(api: &ApiClient) -> Result<Vec<SessionResponse>, ApiError> {
    api.get_my_sessions().await
}

pub async fn send_invites(
    api: &ApiClient,
    session_id: &str,
    emails: Vec<String>,
    message: Option<String>,
) -> Result<MessageResponse, ApiError> {
    api.send_invites(session_id, InvitationRequest { emails, message })
        .await
}
