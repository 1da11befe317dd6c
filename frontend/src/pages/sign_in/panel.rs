use super::view_model::use_sign_in_view_model;
use crate::{
    components::{
        common::{Button, TextField},
        error::InlineErrorMessage,
    },
    utils::navigation,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SignInPanel() -> impl IntoView {
    let vm = use_sign_in_view_model();
    let pending = vm.sign_in_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in to your account"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Lost & Found"</p>
                </div>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <TextField id="email" label="Email address" value=vm.email input_type="email" />
                    <TextField id="password" label="Password" value=vm.password input_type="password" />
                    <InlineErrorMessage error=vm.error />
                    <Button class="w-full" loading=pending attr:type="submit">
                        "Sign in"
                    </Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "Not a member? "
                    <a href=navigation::SIGN_UP_PATH class="font-semibold text-action-primary-bg hover:underline">
                        "Create an account"
                    </a>
                </p>
            </div>
        </div>
    }
}
