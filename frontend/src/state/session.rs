use crate::{
    api::{ApiClient, ApiError, AuthBinding, Role, SignInRequest, SignUpRequest, UnauthorizedHandler},
    state::token::{decode_identity, Identity},
    utils::{
        navigation::{self, BrowserNavigator, Navigator},
        storage::{LocalTokenStore, TokenStore},
    },
};
use leptos::*;
use std::rc::Rc;

/// In-memory view of the signed-in user.
///
/// `identity` bundles role and user id, so they are either both known or
/// both unknown. It is only set when the token decodes cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub identity: Option<Identity>,
}

impl SessionState {
    pub fn from_token(token: Option<String>) -> Self {
        let identity = token.as_deref().and_then(|raw| match decode_identity(raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                log::warn!("could not decode session token: {}", err);
                None
            }
        });
        Self { token, identity }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.user_id.as_str())
    }

    pub fn is_staff_or_admin(&self) -> bool {
        self.role().map(Role::is_staff_or_admin).unwrap_or(false)
    }
}

#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    on_unauthorized: UnauthorizedHandler,
}

fn end_session(state: RwSignal<SessionState>, tokens: &dyn TokenStore, navigator: &dyn Navigator) {
    tokens.clear();
    state.set(SessionState::default());
    let on_forbidden = navigator
        .current_path()
        .map(|path| path == navigation::FORBIDDEN_PATH)
        .unwrap_or(false);
    if !on_forbidden {
        navigator.redirect(navigation::SIGN_IN_PATH);
    }
}

impl SessionStore {
    /// Rehydrates the session from whatever token was persisted.
    pub fn restore(tokens: Rc<dyn TokenStore>, navigator: Rc<dyn Navigator>) -> Self {
        let state = create_rw_signal(SessionState::from_token(tokens.load()));
        let on_unauthorized = {
            let tokens = tokens.clone();
            let navigator = navigator.clone();
            UnauthorizedHandler::new(move || end_session(state, tokens.as_ref(), navigator.as_ref()))
        };
        Self {
            state,
            tokens,
            navigator,
            on_unauthorized,
        }
    }

    pub fn in_browser() -> Self {
        Self::restore(Rc::new(LocalTokenStore::new()), Rc::new(BrowserNavigator))
    }

    pub fn state(&self) -> Signal<SessionState> {
        self.state.into()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        self.navigator.clone()
    }

    /// Stores the token and derives role and user id from it. An undecodable
    /// token is still kept; the session is then authenticated without identity.
    pub fn login(&self, token: &str) -> Result<(), ApiError> {
        self.tokens
            .save(token)
            .map_err(ApiError::unknown)?;
        self.state.set(SessionState::from_token(Some(token.to_string())));
        self.on_unauthorized.rearm();
        Ok(())
    }

    /// Forgets the token and returns to sign-in, unless the forbidden page is
    /// showing.
    pub fn logout(&self) {
        end_session(self.state, self.tokens.as_ref(), self.navigator.as_ref());
    }

    /// Sends anonymous visitors of non-public pages to sign-in.
    pub fn redirect_if_signed_out(&self) {
        if self.state.get_untracked().is_authenticated() {
            return;
        }
        let path = self.navigator.current_path().unwrap_or_default();
        if !navigation::is_public_path(&path) {
            self.navigator.redirect(navigation::SIGN_IN_PATH);
        }
    }

    pub fn auth_binding(&self) -> AuthBinding {
        AuthBinding {
            tokens: self.tokens.clone(),
            navigator: self.navigator.clone(),
            on_unauthorized: self.on_unauthorized.clone(),
        }
    }

    pub fn api_client(&self, base_url: Option<String>) -> ApiClient {
        ApiClient::bound(base_url, self.auth_binding())
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = match use_context::<SessionStore>() {
        Some(existing) => existing,
        None => {
            let created = SessionStore::in_browser();
            provide_context(created.clone());
            created
        }
    };
    if use_context::<ApiClient>().is_none() {
        provide_context(session.api_client(None));
    }
    let bootstrap = session.clone();
    create_effect(move |_| bootstrap.redirect_if_signed_out());
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(SessionStore::in_browser)
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| use_session().api_client(None))
}

pub async fn sign_in_request(
    request: SignInRequest,
    api: &ApiClient,
    session: &SessionStore,
) -> Result<(), ApiError> {
    let token = api.sign_in(&request).await?;
    session.login(&token)
}

pub async fn sign_up_request(
    request: SignUpRequest,
    api: &ApiClient,
    session: &SessionStore,
) -> Result<(), ApiError> {
    let token = api.sign_up(&request).await?;
    session.login(&token)
}

pub fn use_sign_in_action() -> Action<SignInRequest, Result<(), ApiError>> {
    let session = use_session();
    let api = use_api();
    create_action(move |request: &SignInRequest| {
        let payload = request.clone();
        let session = session.clone();
        let api = api.clone();
        async move { sign_in_request(payload, &api, &session).await }
    })
}

pub fn use_sign_up_action() -> Action<SignUpRequest, Result<(), ApiError>> {
    let session = use_session();
    let api = use_api();
    create_action(move |request: &SignUpRequest| {
        let payload = request.clone();
        let session = session.clone();
        let api = api.clone();
        async move { sign_up_request(payload, &api, &session).await }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::state::token::encode_test_token;
    use crate::test_support::ssr::with_runtime;
    use crate::utils::{navigation::RecordingNavigator, storage::MemoryTokenStore};
    use serde_json::json;

    fn admin_token() -> String {
        encode_test_token(json!({ "sub": "U001", "roles": "ROLE_ADMIN" }))
    }

    fn store_at(path: &str, token: Option<String>) -> (SessionStore, MemoryTokenStore, RecordingNavigator) {
        let tokens = token.map(MemoryTokenStore::with_token).unwrap_or_default();
        let navigator = RecordingNavigator::at(path);
        let store = SessionStore::restore(Rc::new(tokens.clone()), Rc::new(navigator.clone()));
        (store, tokens, navigator)
    }

    fn assert_identity_consistent(state: &SessionState) {
        assert_eq!(state.role().is_some(), state.user_id().is_some());
        if state.identity.is_some() {
            assert!(state.token.is_some());
        }
    }

    #[test]
    fn restore_decodes_persisted_token() {
        with_runtime(|| {
            let (store, _, _) = store_at("/items/all", Some(admin_token()));
            let state = store.snapshot();
            assert!(state.is_authenticated());
            assert_eq!(state.role(), Some(Role::Admin));
            assert_eq!(state.user_id(), Some("U001"));
        });
    }

    #[test]
    fn login_persists_token_and_derives_identity() {
        with_runtime(|| {
            let (store, tokens, _) = store_at("/sign-in", None);
            let token = encode_test_token(json!({ "sub": "U042", "roles": "ROLE_USER" }));
            store.login(&token).unwrap();

            assert_eq!(tokens.load().as_deref(), Some(token.as_str()));
            let state = store.snapshot();
            assert_eq!(state.role(), Some(Role::User));
            assert_eq!(state.user_id(), Some("U042"));
            assert_identity_consistent(&state);
        });
    }

    #[test]
    fn undecodable_token_is_kept_without_identity() {
        with_runtime(|| {
            let (store, tokens, _) = store_at("/sign-in", None);
            store.login("not-a-jwt").unwrap();

            let state = store.snapshot();
            assert!(state.is_authenticated());
            assert!(state.role().is_none());
            assert!(state.user_id().is_none());
            assert_eq!(tokens.load().as_deref(), Some("not-a-jwt"));
        });
    }

    #[test]
    fn role_and_user_id_are_present_together_for_any_token() {
        with_runtime(|| {
            let tokens = [
                None,
                Some("opaque".to_string()),
                Some(encode_test_token(json!({ "sub": "U1" }))),
                Some(encode_test_token(json!({ "roles": "ROLE_USER" }))),
                Some(encode_test_token(json!({ "sub": "U1", "roles": "ROLE_GUEST" }))),
                Some(admin_token()),
            ];
            for token in tokens {
                assert_identity_consistent(&SessionState::from_token(token));
            }
        });
    }

    #[test]
    fn logout_clears_storage_and_redirects_to_sign_in() {
        with_runtime(|| {
            let (store, tokens, navigator) = store_at("/items/all", Some(admin_token()));
            store.logout();

            assert!(tokens.load().is_none());
            assert_eq!(store.snapshot(), SessionState::default());
            assert_eq!(navigator.last_visit().as_deref(), Some("/sign-in"));
        });
    }

    #[test]
    fn logout_on_forbidden_page_clears_but_stays_put() {
        with_runtime(|| {
            let (store, tokens, navigator) = store_at("/forbidden", Some(admin_token()));
            store.logout();

            assert!(tokens.load().is_none());
            assert!(!store.snapshot().is_authenticated());
            assert!(navigator.visits().is_empty());
        });
    }

    #[test]
    fn signed_out_visitors_are_sent_to_sign_in_except_on_public_pages() {
        with_runtime(|| {
            let (store, _, navigator) = store_at("/items/lost", None);
            store.redirect_if_signed_out();
            assert_eq!(navigator.visits(), vec!["/sign-in".to_string()]);

            let (store, _, navigator) = store_at("/sign-up", None);
            store.redirect_if_signed_out();
            assert!(navigator.visits().is_empty());

            let (store, _, navigator) = store_at("/items/lost", Some(admin_token()));
            store.redirect_if_signed_out();
            assert!(navigator.visits().is_empty());
        });
    }

    #[test]
    fn login_rearms_the_unauthorized_handler() {
        with_runtime(|| {
            let (store, _, navigator) = store_at("/items/all", Some(admin_token()));
            let binding = store.auth_binding();

            assert!(binding.on_unauthorized.invoke());
            assert!(!binding.on_unauthorized.invoke());
            assert!(!store.snapshot().is_authenticated());

            store.login(&admin_token()).unwrap();
            assert!(binding.on_unauthorized.is_armed());
            assert_eq!(navigator.visits(), vec!["/sign-in".to_string()]);
        });
    }
}
