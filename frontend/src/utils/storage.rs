use web_sys::{Storage, Window};

use crate::api::ApiError;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const DEVICE_LABEL_KEY: &str = "device_label";

pub fn window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::unknown("No window object"))
}

pub fn local_storage() -> Result<Storage, ApiError> {
    window()?
        .local_storage()
        .map_err(|_| ApiError::unknown("No localStorage"))?
        .ok_or_else(|| ApiError::unknown("No localStorage"))
}
