use super::view_model::use_sign_up_view_model;
use crate::{
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
    },
    utils::navigation,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SignUpPanel() -> impl IntoView {
    let vm = use_sign_up_view_model();
    let pending = vm.sign_up_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign Up"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Sign up to access your account"</p>
                </div>
                <form class="mt-8 space-y-4" on:submit=on_submit novalidate=true>
                    <TextField id="name" label="Full Name" value=vm.name />
                    <TextField id="email" label="Email Address" value=vm.email input_type="email" />
                    <TextField id="password" label="Password" value=vm.password input_type="password" />
                    <TextField id="re-password" label="Confirm Password" value=vm.confirm_password input_type="password" />
                    <Show when=move || !vm.passwords_match.get()>
                        <p class="text-sm text-status-error-text">"Passwords do not match"</p>
                    </Show>
                    <InlineErrorMessage error=vm.error />
                    <Button class="w-full" loading=pending attr:type="submit">
                        "Sign Up"
                    </Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "Already have an account? "
                    <a href=navigation::SIGN_IN_PATH class="font-semibold text-action-primary-bg hover:underline">
                        "Sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}
