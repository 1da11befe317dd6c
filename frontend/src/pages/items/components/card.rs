use crate::{
    api::Item,
    config,
    pages::items::utils::status_badge_class,
};
use leptos::*;

#[component]
pub fn ItemCard(item: Item, on_select: Callback<Item>) -> impl IntoView {
    let image = item
        .item_image_url
        .as_deref()
        .map(|path| config::asset_url(&config::current_api_base_url(), path));
    let status = item.item_status;
    let name = item.item_name.clone();
    let location = item.location.clone().unwrap_or_default();

    view! {
        <div
            class="group relative rounded bg-surface-elevated hover:cursor-pointer"
            on:click=move |_| on_select.call(item.clone())
        >
            {image.map(|src| view! {
                <img
                    src=src
                    alt=name.clone()
                    class="aspect-square w-full rounded-md bg-surface-muted object-cover group-hover:opacity-75 lg:aspect-auto lg:h-40"
                />
            })}
            <span class=format!(
                "absolute left-1 top-1 rounded px-2 text-sm font-bold {}",
                status_badge_class(status)
            )>
                {status.map(|s| s.as_str()).unwrap_or_default()}
            </span>
            <div class="mt-2">
                <h3 class="font-bold text-fg">{name.clone()}</h3>
                <p class="mt-1 text-sm text-fg-muted">{location}</p>
            </div>
        </div>
    }
}
