use crate::{
    api::{ApiError, Role, User},
    pages::sign_up::utils::{looks_like_email, MIN_NAME_LEN},
};

pub fn parse_role(raw: &str) -> Option<Role> {
    Role::from_claim(raw)
}

/// Checks an inline edit before it is sent.
pub fn validate_edit(user: &User) -> Result<User, ApiError> {
    let name = user.name.trim();
    let email = user.email.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ApiError::validation(format!(
            "Name must be at least {} characters long.",
            MIN_NAME_LEN
        )));
    }
    if !looks_like_email(email) {
        return Err(ApiError::validation("Invalid email address."));
    }
    Ok(User {
        name: name.to_string(),
        email: email.to_string(),
        ..user.clone()
    })
}

pub fn replace_user(list: &mut [User], updated: &User) {
    if let Some(slot) = list.iter_mut().find(|user| user.id == updated.id) {
        *slot = updated.clone();
    }
}
