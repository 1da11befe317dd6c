use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

use crate::api::Role;

/// Who the token says the caller is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub role: Role,
    pub user_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not base64url: {0}")]
    Encoding(base64::DecodeError),
    #[error("token payload is not a JSON object: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("token has no `{0}` claim")]
    MissingClaim(&'static str),
    #[error("token carries no known role (got {0:?})")]
    UnknownRole(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RolesClaim {
    One(String),
    Many(Vec<String>),
}

impl RolesClaim {
    fn into_names(self) -> Vec<String> {
        match self {
            RolesClaim::One(joined) => joined
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            RolesClaim::Many(names) => names,
        }
    }
}

#[derive(Deserialize)]
struct Claims {
    sub: Option<String>,
    roles: Option<RolesClaim>,
}

/// Reads role and subject out of a `header.payload.signature` token.
/// The signature is not checked; the server remains the authority.
pub fn decode_identity(token: &str) -> Result<Identity, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(TokenError::Encoding)?;
    let claims: Claims = serde_json::from_slice(&bytes)?;

    let names = claims
        .roles
        .ok_or(TokenError::MissingClaim("roles"))?
        .into_names();
    let role = names
        .iter()
        .find_map(|name| Role::from_claim(name))
        .ok_or(TokenError::UnknownRole(names.clone()))?;
    let user_id = claims
        .sub
        .filter(|sub| !sub.trim().is_empty())
        .ok_or(TokenError::MissingClaim("sub"))?;

    Ok(Identity { role, user_id })
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, body)
}
