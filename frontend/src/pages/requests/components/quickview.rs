use super::status_badge::StatusBadge;
use crate::{
    api::{RequestStatus, Role},
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::Modal,
    },
    config,
    pages::requests::{
        repository::Review,
        utils::{can_edit, can_review, joined, show_approve, show_reject},
        view_model::RequestsViewModel,
    },
};
use leptos::*;

fn field(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <h4 class="text-xs text-fg">{label}</h4>
        <p class="col-span-2 mb-2 font-mono text-xs text-fg-muted">{value.unwrap_or_default()}</p>
    }
}

/// Request details with the requested item, review buttons and message edit.
#[component]
pub fn RequestQuickView(vm: RequestsViewModel) -> impl IntoView {
    let is_open = Signal::derive(move || vm.selected.with(Option::is_some));
    let title = Signal::derive(move || {
        vm.selected
            .with(|r| r.as_ref().and_then(|r| r.request_id.clone()).unwrap_or_default())
    });
    let close = Callback::new(move |_| vm.close());

    let body = move || {
        let request = vm.selected.get()?;
        let role = vm.session.with(|s| s.role());
        let request_id = request.request_id.clone().unwrap_or_default();
        let status = request.request_status;
        let reviewer = can_review(role);
        let editable = can_edit(&request, role);
        let item = move || vm.item_resource.get().flatten();
        let approve_id = request_id.clone();
        let reject_id = request_id;

        Some(view! {
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-12">
                <div class="sm:col-span-5">
                    {move || item().and_then(|item| item.item_image_url).map(|path| view! {
                        <img
                            src=config::asset_url(&config::current_api_base_url(), &path)
                            alt="Requested item"
                            class="w-full rounded-lg bg-surface-muted object-contain"
                        />
                    })}
                </div>
                <div class="space-y-4 sm:col-span-7">
                    <div class="flex justify-end">
                        {move || {
                            if vm.editing.get() && reviewer && status == Some(RequestStatus::Rejected) {
                                view! {
                                    <select
                                        class="rounded-md border px-2 py-1 text-xs font-medium"
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            vm.draft.update(|draft| {
                                                draft.request_status = match value.as_str() {
                                                    "PENDING" => Some(RequestStatus::Pending),
                                                    _ => Some(RequestStatus::Rejected),
                                                };
                                            });
                                        }
                                    >
                                        <option value="REJECTED" selected=true>"REJECTED"</option>
                                        <option value="PENDING">"PENDING"</option>
                                    </select>
                                }
                                .into_view()
                            } else {
                                view! { <StatusBadge status=status/> }.into_view()
                            }
                        }}
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-3">
                        {field("Requested User Id :", request.user.clone())}
                        {field("Requested Item Id :", Some(request.item.clone()))}
                        <h4 class="text-xs text-fg">"Requested Item Name :"</h4>
                        <p class="col-span-2 mb-2 font-mono text-xs text-fg-muted">
                            {move || item().map(|item| item.item_name).unwrap_or_default()}
                        </p>
                        <h4 class="text-xs text-fg">"Request Message :"</h4>
                        {move || {
                            if vm.editing.get() && role == Some(Role::User) {
                                view! {
                                    <textarea
                                        rows="3"
                                        class="col-span-2 mb-2 rounded-md border p-2 font-mono text-xs"
                                        prop:value=move || vm.draft.with(|d| d.request_message.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            vm.draft.update(|d| d.request_message = value);
                                        }
                                    ></textarea>
                                }
                                .into_view()
                            } else {
                                view! {
                                    <p class="col-span-2 mb-2 font-mono text-xs text-fg-muted">
                                        {vm.draft.with(|d| d.request_message.clone())}
                                    </p>
                                }
                                .into_view()
                            }
                        }}
                    </div>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                        <div>
                            <h4 class="text-xs text-fg">"Request Date"</h4>
                            <p class="text-xs text-fg-muted">
                                {joined(request.request_date.as_deref(), request.request_time.as_deref())}
                            </p>
                        </div>
                        {joined(request.review_date.as_deref(), request.review_time.as_deref()).map(|reviewed| view! {
                            <div>
                                <h4 class="text-xs text-fg">"Review Date"</h4>
                                <p class="text-xs text-fg-muted">{reviewed}</p>
                            </div>
                        })}
                    </div>
                    {move || item().map(|item| view! {
                        <div class="space-y-2">
                            {item.item_description.map(|text| view! {
                                <div>
                                    <h4 class="text-xs text-fg">"Item Description"</h4>
                                    <p class="text-xs text-fg-muted">{text}</p>
                                </div>
                            })}
                            {item.location.map(|text| view! {
                                <div>
                                    <h4 class="text-xs text-fg">"Location"</h4>
                                    <p class="text-xs text-fg-muted">{text}</p>
                                </div>
                            })}
                        </div>
                    })}
                    <div class="flex gap-2">
                        {(reviewer && show_approve(status)).then(|| view! {
                            <Button
                                class="flex-1"
                                on:click=move |_| vm.review(approve_id.clone(), Review::Approve)
                            >
                                "Approve"
                            </Button>
                        })}
                        {(reviewer && show_reject(status)).then(|| view! {
                            <Button
                                class="flex-1"
                                variant=ButtonVariant::Danger
                                on:click=move |_| vm.review(reject_id.clone(), Review::Reject)
                            >
                                "Reject"
                            </Button>
                        })}
                        {editable.then(|| view! {
                            <Button
                                class="flex-1"
                                variant=ButtonVariant::Secondary
                                loading=vm.save_action.pending()
                                on:click=move |_| vm.edit_or_save()
                            >
                                {move || if vm.editing.get() { "Save" } else { "Edit" }}
                            </Button>
                        })}
                    </div>
                </div>
            </div>
        })
    };

    view! {
        <Modal is_open=is_open title=title on_close=close max_width="max-w-4xl">
            {body}
        </Modal>
    }
}
