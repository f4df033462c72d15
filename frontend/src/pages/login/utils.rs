use crate::api::ApiError;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::validation("Enter your email and password."));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("That does not look like an email address."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_credentials;

    #[test]
    fn rejects_empty_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("jane@example.com", "").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(validate_credentials("jane.example.com", "secret").is_err());
    }

    #[test]
    fn accepts_plausible_credentials() {
        assert!(validate_credentials("jane@example.com", "secret").is_ok());
    }
}
