use super::{
    components::{card::ItemCard, detail_modal::ItemDetailModal},
    repository::ItemScope,
    view_model::use_items_view_model,
};
use crate::api::Item;
use crate::components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner};
use leptos::*;

#[component]
pub fn ItemsPanel(scope: Signal<Option<ItemScope>>) -> impl IntoView {
    let vm = use_items_view_model(scope);
    let title = move || scope.get().map(ItemScope::title).unwrap_or("Items");
    let on_select = Callback::new(move |item: Item| vm.open(item));

    view! {
        <div class="px-4 sm:px-0 space-y-4">
            <div class="flex flex-wrap items-center justify-between gap-3">
                <h2 class="text-2xl font-bold text-fg">{title}</h2>
                <div class="flex items-center gap-2">
                    <input
                        type="search"
                        aria-label="Search items"
                        placeholder="Search"
                        class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || vm.search_term.get()
                        on:input=move |ev| vm.set_search_term(event_target_value(&ev))
                    />
                    <a
                        href="/items/add-items"
                        class="rounded-md bg-action-primary-bg px-3 py-2 text-sm font-semibold text-action-primary-text hover:opacity-90"
                    >
                        "Add Items"
                    </a>
                </div>
            </div>
            <InlineErrorMessage error=vm.error />
            {move || vm.notice.get().filter(|_| vm.selected.with(Option::is_none)).map(|text| view! {
                <p class="text-sm text-status-success-text">{text}</p>
            })}
            <Show
                when=move || !vm.loading()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <Show
                    when=move || vm.displayed.with(|items| !items.is_empty())
                    fallback=|| view! { <EmptyState title="No items found." /> }
                >
                    <div class="grid grid-cols-1 gap-x-6 gap-y-8 sm:grid-cols-2 lg:grid-cols-4">
                        <For
                            each=move || vm.displayed.get()
                            key=|item| item.item_id.clone().unwrap_or_else(|| item.item_name.clone())
                            children=move |item| view! { <ItemCard item=item on_select=on_select /> }
                        />
                    </div>
                </Show>
            </Show>
            <ItemDetailModal vm=vm />
        </div>
    }
}
