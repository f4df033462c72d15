use crate::api::ApiError;

/// Parse a comma- or whitespace-separated list of invitee addresses.
pub fn parse_invite_emails(raw: &str) -> Result<Vec<String>, ApiError> {
    let emails: Vec<String> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    if emails.is_empty() {
        return Err(ApiError::validation("Enter at least one email address."));
    }
    if let Some(bad) = emails.iter().find(|email| !email.contains('@')) {
        return Err(ApiError::validation(format!(
            "\"{}\" does not look like an email address.",
            bad
        )));
    }
    Ok(emails)
}

#[cfg(test)]
mod tests {
    use super::parse_invite_emails;

    #[test]
    fn splits_on_commas_and_whitespace() {
        let emails = parse_invite_emails("a@example.com, b@example.com\n c@example.com").unwrap();
        assert_eq!(
            emails,
            ["a@example.com", "b@example.com", "c@example.com"]
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_invite_emails("").is_err());
        assert!(parse_invite_emails(" , ,, ").is_err());
    }

    #[test]
    fn rejects_addresses_without_an_at_sign() {
        let err = parse_invite_emails("a@example.com, not-an-email").unwrap_err();
        assert!(err.error.contains("not-an-email"));
    }
}
