use super::utils;
use crate::{
    api::{ApiError, SignInRequest},
    state::session::{use_session, use_sign_in_action},
    utils::navigation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignInViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub sign_in_action: Action<SignInRequest, Result<(), ApiError>>,
}

impl SignInViewModel {
    pub fn submit(&self) {
        if self.sign_in_action.pending().get_untracked() {
            return;
        }
        match utils::validate_credentials(&self.email.get_untracked(), &self.password.get_untracked()) {
            Ok(request) => {
                self.error.set(None);
                self.sign_in_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_sign_in_view_model() -> SignInViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let sign_in_action = use_sign_in_action();
    let navigator = use_session().navigator();

    create_effect(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    password.set(String::new());
                    navigator.redirect(navigation::HOME_PATH);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SignInViewModel {
        email,
        password,
        error,
        sign_in_action,
    }
}
