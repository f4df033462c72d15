use crate::api::{ApiError, CreateOfferRequest, UserResponse};

/// The live feed is only opened for users who can actually act on offers.
pub fn should_subscribe(user: Option<&UserResponse>) -> bool {
    user.map(|user| user.role.is_tutor()).unwrap_or(false)
}

pub fn validate_offer_form(
    subject: &str,
    description: &str,
    budget: &str,
) -> Result<CreateOfferRequest, ApiError> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err(ApiError::validation("Enter a subject for your request."));
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(ApiError::validation("Describe what you need help with."));
    }

    let budget = budget.trim();
    let budget = if budget.is_empty() {
        None
    } else {
        match budget.parse::<f64>() {
            Ok(value) if value > 0.0 => Some(value),
            _ => return Err(ApiError::validation("Budget must be a positive number.")),
        }
    };

    Ok(CreateOfferRequest {
        subject: subject.to_string(),
        description: description.to_string(),
        preferred_time: None,
        budget,
    })
}
