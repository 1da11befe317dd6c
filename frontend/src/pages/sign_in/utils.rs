use crate::api::{ApiError, SignInRequest};

pub fn validate_credentials(email: &str, password: &str) -> Result<SignInRequest, ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(SignInRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}
