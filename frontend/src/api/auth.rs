use reqwest::StatusCode;

use super::{
    client::{parse_json, ApiClient},
    types::{ApiError, SignInRequest, SignUpRequest, TokenResponse},
};

impl ApiClient {
    /// Exchanges credentials for a token. No bearer header, no 401 handling.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<String, ApiError> {
        let url = self.endpoint(&["auth", "login"]).await;
        let response = self
            .send_public(self.http_client().post(&url).json(request))
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::unauthorized("Invalid username or password."));
        }
        parse_json::<TokenResponse>(response)
            .await
            .map(|body| body.token)
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<String, ApiError> {
        let url = self.endpoint(&["auth", "register"]).await;
        let response = self
            .send_public(self.http_client().post(&url).json(request))
            .await?;

        if response.status() == StatusCode::CONFLICT {
            return Err(ApiError::conflict("Email already exists."));
        }
        parse_json::<TokenResponse>(response)
            .await
            .map(|body| body.token)
    }
}
