use crate::{
    api::{Item, Role},
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, Modal},
    },
    config,
    pages::items::{
        utils::{can_manage, can_request},
        view_model::ItemsViewModel,
    },
};
use leptos::*;

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
    value.filter(|v| !v.trim().is_empty()).map(|value| {
        view! {
            <div>
                <dt class="text-sm font-medium text-fg">{label}</dt>
                <dd class="ml-10 mb-2 text-sm text-fg-muted">{value}</dd>
            </div>
        }
    })
}

#[component]
fn ItemDetails(item: Item, staff_view: bool) -> impl IntoView {
    let image = item
        .item_image_url
        .as_deref()
        .map(|path| config::asset_url(&config::current_api_base_url(), path));
    let date = item.found_or_lost_date.map(|d| d.format("%Y-%m-%d").to_string());

    view! {
        {image.map(|src| view! {
            <div class="flex justify-center">
                <img src=src alt=item.item_name.clone() class="max-h-96 max-w-full"/>
            </div>
        })}
        <dl class="mt-4">
            {detail_row("Item Id:", item.item_id.clone())}
            {detail_row("Location:", item.location.clone())}
            {detail_row("Status:", item.item_status.map(|s| s.as_str().to_string()))}
            {detail_row("Description:", item.item_description.clone())}
            {staff_view.then(|| view! {
                <>
                    {detail_row("Date:", date.clone())}
                    {detail_row("Created Date:", item.create_at_date.clone())}
                    {detail_row("Created Time:", item.create_at_time.clone())}
                    {detail_row("Claimed By:", item.claimed_by.clone())}
                </>
            })}
        </dl>
    }
}

/// Detail view for the selected item with claim, edit and delete.
#[component]
pub fn ItemDetailModal(vm: ItemsViewModel) -> impl IntoView {
    let is_open = Signal::derive(move || vm.selected.with(Option::is_some));
    let title = Signal::derive(move || {
        vm.selected
            .with(|item| item.as_ref().map(|i| i.item_name.clone()).unwrap_or_default())
    });
    let requesting = create_rw_signal(false);
    let message = create_rw_signal(String::new());
    let confirm_delete = create_rw_signal(false);
    let navigator = store_value(crate::state::session::use_session().navigator());

    let close = Callback::new(move |_| {
        requesting.set(false);
        message.set(String::new());
        vm.close();
    });

    create_effect(move |_| {
        if vm.notice.with(Option::is_some) {
            requesting.set(false);
            message.set(String::new());
        }
    });

    let body = move || {
        let item = vm.selected.get()?;
        let session = vm.session.get();
        let staff_view = session.is_staff_or_admin();
        let manage = can_manage(&item, &session);
        let request = can_request(&item) && session.role() != Some(Role::Admin);
        let edit_path = item
            .item_id
            .as_deref()
            .map(|id| format!("/items/edit-item/{}", id))
            .unwrap_or_default();

        Some(view! {
            <ItemDetails item=item staff_view=staff_view/>
            {move || vm.notice.get().map(|text| view! {
                <p class="text-sm text-status-success-text">{text}</p>
            })}
            <Show when=move || requesting.get()>
                <div class="space-y-2">
                    <label for="request-message" class="block text-sm font-medium text-fg">"Request Message"</label>
                    <textarea
                        id="request-message"
                        rows="4"
                        class="block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-fg"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <Button
                        loading=vm.claim_action.pending()
                        on:click=move |_| vm.request_selected(message.get_untracked())
                    >
                        "Request"
                    </Button>
                </div>
            </Show>
            <div class="flex flex-wrap justify-end gap-2 pt-2">
                {request.then(|| view! {
                    <Button on:click=move |_| requesting.set(true)>"Request Item"</Button>
                })}
                {manage.then(|| {
                    let edit_path = edit_path.clone();
                    view! {
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |_| navigator.with_value(|nav| nav.redirect(&edit_path))
                        >
                            "Edit"
                        </Button>
                        <Button
                            variant=ButtonVariant::Danger
                            loading=vm.delete_action.pending()
                            on:click=move |_| confirm_delete.set(true)
                        >
                            "Delete"
                        </Button>
                    }
                })}
                <Button variant=ButtonVariant::Ghost on:click=move |_| close.call(())>"Close"</Button>
            </div>
        })
    };

    view! {
        <Modal is_open=is_open title=title on_close=close max_width="max-w-lg">
            {body}
        </Modal>
        <ConfirmDialog
            is_open=confirm_delete.into()
            title="Delete item"
            message="This item will be removed permanently."
            confirm_label="Delete"
            destructive=true
            on_confirm=Callback::new(move |_| {
                confirm_delete.set(false);
                vm.delete_selected();
            })
            on_cancel=Callback::new(move |_| confirm_delete.set(false))
        />
    }
}
