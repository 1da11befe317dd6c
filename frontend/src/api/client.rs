use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{cell::Cell, fmt, rc::Rc};

use crate::{
    api::types::ApiError,
    config,
    utils::{
        navigation::{self, Navigator},
        storage::TokenStore,
    },
};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Callback run when the server answers 401.
///
/// The callback is latched: once it has run it stays quiet until `rearm`
/// is called (the session store does so on every login), so a burst of
/// failing requests tears the session down exactly once.
#[derive(Clone)]
pub struct UnauthorizedHandler {
    callback: Rc<dyn Fn()>,
    armed: Rc<Cell<bool>>,
}

impl UnauthorizedHandler {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
            armed: Rc::new(Cell::new(true)),
        }
    }

    /// Clears the stored token and sends the browser to sign-in.
    pub fn clear_and_redirect(tokens: Rc<dyn TokenStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self::new(move || {
            tokens.clear();
            navigator.redirect(navigation::SIGN_IN_PATH);
        })
    }

    /// Returns whether the callback actually ran.
    pub fn invoke(&self) -> bool {
        if self.armed.replace(false) {
            (self.callback)();
            true
        } else {
            false
        }
    }

    pub fn rearm(&self) {
        self.armed.set(true);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

impl fmt::Debug for UnauthorizedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedHandler")
            .field("armed", &self.armed.get())
            .finish()
    }
}

/// Everything the client needs from the session: where the token lives, how
/// to navigate, and what to do on 401.
#[derive(Clone)]
pub struct AuthBinding {
    pub tokens: Rc<dyn TokenStore>,
    pub navigator: Rc<dyn Navigator>,
    pub on_unauthorized: UnauthorizedHandler,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    auth: AuthBinding,
}

impl ApiClient {
    pub fn bound(base_url: Option<String>, auth: AuthBinding) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.map(|url| config::normalize_base_url(&url)),
            auth,
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Builds `{base}/{segment}/...`, percent-encoding every segment.
    pub(crate) async fn endpoint(&self, segments: &[&str]) -> String {
        join_segments(&self.resolved_base_url().await, segments)
    }

    fn with_bearer(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth.tokens.load() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn intercept(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            if self.auth.on_unauthorized.invoke() {
                log::warn!("session rejected by server, signing out");
            }
        } else if status == StatusCode::FORBIDDEN {
            let on_forbidden = self
                .auth
                .navigator
                .current_path()
                .map(|path| path == navigation::FORBIDDEN_PATH)
                .unwrap_or(false);
            if !on_forbidden {
                self.auth.navigator.redirect(navigation::FORBIDDEN_PATH);
            }
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        let mocked = test_hooks::respond(&request);
        #[cfg(not(all(test, not(target_arch = "wasm32"))))]
        let mocked: Option<Result<Response, ApiError>> = None;
        if let Some(result) = mocked {
            return result;
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    /// Sends with the bearer token attached and runs the 401/403 side effects.
    pub(crate) async fn send_authorized(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.execute(self.with_bearer(builder)).await?;
        self.intercept(response.status());
        Ok(response)
    }

    /// Sends without token or interception; used by sign-in and sign-up.
    pub(crate) async fn send_public(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        self.execute(builder).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments).await;
        let response = self.send_authorized(self.client.get(&url)).await?;
        parse_json(response).await
    }
}

pub(crate) fn join_segments(base_url: &str, segments: &[&str]) -> String {
    let mut url = base_url.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    }
    url
}

pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}

pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_from_parts(status, &body)
}

pub(crate) fn error_from_parts(status: StatusCode, body: &str) -> ApiError {
    let parsed: Option<Value> = serde_json::from_str(body.trim()).ok();
    let message = parsed
        .as_ref()
        .and_then(message_from_json)
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty() && parsed.is_none()).then(|| text.to_string())
        })
        .unwrap_or_else(|| default_message(status));

    let mut error = match status {
        StatusCode::UNAUTHORIZED => ApiError::unauthorized(message),
        StatusCode::FORBIDDEN => ApiError::forbidden(message),
        StatusCode::NOT_FOUND => ApiError::not_found(message),
        StatusCode::CONFLICT => ApiError::conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::validation(message),
        s if s.is_server_error() => ApiError::server(message),
        _ => ApiError::unknown(message),
    };
    error.details = parsed.filter(Value::is_object);
    error
}

fn message_from_json(value: &Value) -> Option<String> {
    if let Some(text) = value.as_str() {
        return Some(text.to_string());
    }
    ["message", "error", "detail"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn default_message(status: StatusCode) -> String {
    match status {
        StatusCode::UNAUTHORIZED => "Your session has expired. Please sign in again.".into(),
        StatusCode::FORBIDDEN => "You do not have permission to do that.".into(),
        StatusCode::NOT_FOUND => "The requested resource was not found.".into(),
        s if s.is_server_error() => "Something went wrong. Please try again later.".into(),
        s => format!("Request failed with status {}", s.as_u16()),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hooks::{register_mock, MockResponse, TestResponder};
