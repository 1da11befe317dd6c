use crate::components::{guard::RequireAuth, layout::Layout};
use leptos::*;
use leptos_router::use_params_map;

mod panel;
pub mod view_model;

pub use panel::ItemFormPanel;

#[component]
pub fn AddItemPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Layout title="Add Item">
                <ItemFormPanel />
            </Layout>
        </RequireAuth>
    }
}

#[component]
pub fn EditItemPage() -> impl IntoView {
    let params = use_params_map();
    view! {
        <RequireAuth>
            {move || {
                let item_id = params.with(|p| p.get("id").cloned());
                view! {
                    <Layout title="Edit Item">
                        <ItemFormPanel item_id=item_id />
                    </Layout>
                }
            }}
        </RequireAuth>
    }
}
