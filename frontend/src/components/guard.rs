use crate::{
    api::Role,
    state::session::{use_session, SessionState},
    utils::navigation::{self, Navigator},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    SignIn,
    Forbidden,
}

impl Access {
    fn redirect_target(self) -> Option<&'static str> {
        match self {
            Access::Granted => None,
            Access::SignIn => Some(navigation::SIGN_IN_PATH),
            Access::Forbidden => Some(navigation::FORBIDDEN_PATH),
        }
    }
}

/// A session without a decodable role is let through; the server still
/// rejects what it does not allow.
pub fn check_access(state: &SessionState, allowed: &[Role]) -> Access {
    if !state.is_authenticated() {
        return Access::SignIn;
    }
    match state.role() {
        Some(role) if !allowed.contains(&role) => Access::Forbidden,
        _ => Access::Granted,
    }
}

/// Sends a denied visitor to the page its access decision names.
pub fn enforce(access: Access, navigator: &dyn Navigator) {
    if let Some(target) = access.redirect_target() {
        log::debug!("route guard denied access ({:?})", access);
        navigator.redirect(target);
    }
}

#[component]
pub fn RequireRole(#[prop(into)] allowed: MaybeSignal<Vec<Role>>, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let access = create_memo(move |_| allowed.with(|roles| check_access(&state.get(), roles)));
    let navigator = session.navigator();
    create_effect(move |_| enforce(access.get(), navigator.as_ref()));
    view! {
        <Show when=move || access.get() == Access::Granted fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Any signed-in role.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRole allowed=Role::ALL.to_vec()>{children()}</RequireRole> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::token::Identity;
    use crate::utils::navigation::RecordingNavigator;

    fn session(role: Option<Role>) -> SessionState {
        SessionState {
            token: Some("t".into()),
            identity: role.map(|role| Identity {
                role,
                user_id: "U1".into(),
            }),
        }
    }

    #[test]
    fn signed_out_goes_to_sign_in() {
        assert_eq!(check_access(&SessionState::default(), &Role::ALL), Access::SignIn);
    }

    #[test]
    fn role_outside_allowed_set_is_forbidden() {
        assert_eq!(check_access(&session(Some(Role::User)), &[Role::Admin]), Access::Forbidden);
        assert_eq!(
            check_access(&session(Some(Role::Staff)), &[Role::Admin, Role::Staff]),
            Access::Granted
        );
    }

    #[test]
    fn denied_access_names_its_redirect() {
        assert_eq!(Access::Granted.redirect_target(), None);
        assert_eq!(Access::SignIn.redirect_target(), Some("/sign-in"));
        assert_eq!(Access::Forbidden.redirect_target(), Some("/forbidden"));
    }

    #[test]
    fn enforce_redirects_user_away_from_admin_routes() {
        let navigator = RecordingNavigator::at("/all-users");
        enforce(check_access(&session(Some(Role::User)), &[Role::Admin]), &navigator);
        assert_eq!(navigator.visits(), vec!["/forbidden".to_string()]);
    }

    #[test]
    fn enforce_sends_signed_out_visitor_to_sign_in() {
        let navigator = RecordingNavigator::at("/items/all");
        enforce(check_access(&SessionState::default(), &Role::ALL), &navigator);
        assert_eq!(navigator.last_visit().as_deref(), Some("/sign-in"));
    }

    #[test]
    fn enforce_leaves_granted_admin_in_place() {
        let navigator = RecordingNavigator::at("/all-users");
        enforce(check_access(&session(Some(Role::Admin)), &[Role::Admin]), &navigator);
        assert!(navigator.visits().is_empty());
    }

    #[test]
    fn unknown_role_is_let_through() {
        assert_eq!(check_access(&session(None), &[Role::Admin]), Access::Granted);
    }
}
