use super::utils::SignUpFormState;
use crate::{
    api::{ApiError, SignUpRequest},
    state::session::{use_session, use_sign_up_action},
    utils::navigation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignUpViewModel {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub passwords_match: Memo<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub sign_up_action: Action<SignUpRequest, Result<(), ApiError>>,
}

impl SignUpViewModel {
    fn form(&self) -> SignUpFormState {
        SignUpFormState {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    pub fn submit(&self) {
        if self.sign_up_action.pending().get_untracked() {
            return;
        }
        match self.form().validate() {
            Ok(request) => {
                self.error.set(None);
                self.sign_up_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_sign_up_view_model() -> SignUpViewModel {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let passwords_match = create_memo(move |_| password.with(|p| confirm_password.with(|c| p == c)));
    let error = create_rw_signal(None::<ApiError>);
    let sign_up_action = use_sign_up_action();
    let navigator = use_session().navigator();

    create_effect(move |_| {
        if let Some(result) = sign_up_action.value().get() {
            match result {
                Ok(()) => navigator.redirect(navigation::HOME_PATH),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SignUpViewModel {
        name,
        email,
        password,
        confirm_password,
        passwords_match,
        error,
        sign_up_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_session, ssr::with_runtime};

    #[test]
    fn mismatched_confirmation_blocks_submit() {
        with_runtime(|| {
            provide_session(None, "/sign-up");
            let vm = use_sign_up_view_model();
            vm.name.set("Alice Example".into());
            vm.email.set("alice@example.com".into());
            vm.password.set("correct-horse".into());
            vm.confirm_password.set("correct-horsf".into());
            assert!(!vm.passwords_match.get());

            vm.submit();
            assert_eq!(vm.error.get().unwrap().error, "Passwords do not match");
            assert!(vm.sign_up_action.input().get().is_none());
        });
    }
}
