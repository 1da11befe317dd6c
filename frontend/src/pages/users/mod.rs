use crate::{
    api::Role,
    components::{guard::RequireRole, layout::Layout},
};
use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::UsersPanel;

/// `/all-users`, admins only.
#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RequireRole allowed=vec![Role::Admin]>
            <Layout>
                <UsersPanel />
            </Layout>
        </RequireRole>
    }
}
