use crate::components::{guard::RequireRole, layout::Layout};
use leptos::*;
use leptos_router::use_params_map;

pub mod components;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::RequestsPanel;
use repository::RequestScope;

/// `/requests/:scope`; a scope that does not exist is treated as forbidden.
#[component]
pub fn RequestsPage() -> impl IntoView {
    let params = use_params_map();
    let scope = Signal::derive(move || {
        params.with(|p| p.get("scope").and_then(|s| RequestScope::parse(s)))
    });
    let allowed = Signal::derive(move || {
        scope
            .get()
            .map(|scope| scope.allowed_roles().to_vec())
            .unwrap_or_default()
    });

    view! {
        <RequireRole allowed=allowed>
            <Layout>
                <RequestsPanel scope=scope />
            </Layout>
        </RequireRole>
    }
}
