use crate::components::{guard::RequireAuth, layout::Layout};
use leptos::*;
use leptos_router::use_params_map;

pub mod components;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::ItemsPanel;
use repository::ItemScope;

/// `/items/:scope`; an unknown scope renders an empty list.
#[component]
pub fn ItemsPage() -> impl IntoView {
    let params = use_params_map();
    let scope = Signal::derive(move || params.with(|p| p.get("scope").and_then(|s| ItemScope::parse(s))));

    view! {
        <RequireAuth>
            <Layout>
                <ItemsPanel scope=scope />
            </Layout>
        </RequireAuth>
    }
}
