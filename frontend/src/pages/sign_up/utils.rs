use crate::api::{ApiError, SignUpRequest};

pub const MIN_NAME_LEN: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpFormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Loose `local@domain.tld` shape check; the server does the real one.
pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

impl SignUpFormState {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    pub fn validate(&self) -> Result<SignUpRequest, ApiError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("Please fill out all fields"));
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ApiError::validation(
                "Full name must be at least 6 characters long",
            ));
        }
        if !looks_like_email(email) {
            return Err(ApiError::validation("Invalid email address"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::validation(
                "Password must be at least 8 characters long",
            ));
        }
        if !self.passwords_match() {
            return Err(ApiError::validation("Passwords do not match"));
        }
        Ok(SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}
