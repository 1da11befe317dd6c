use leptos::*;

mod panel;
pub mod utils;
pub mod view_model;

pub use panel::SignInPanel;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <SignInPanel /> }
}
