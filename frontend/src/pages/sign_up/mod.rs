use leptos::*;

mod panel;
pub mod utils;
pub mod view_model;

pub use panel::SignUpPanel;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! { <SignUpPanel /> }
}
