use super::{
    components::{quickview::RequestQuickView, status_badge::StatusBadge},
    repository::{RequestScope, Review},
    utils::{can_review, show_approve, show_reject},
    view_model::{use_requests_view_model, RequestsViewModel},
};
use crate::{
    api::ClaimRequest,
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
};
use leptos::*;

const TABLE_BUTTON: &str = "rounded px-2 py-1 text-xs font-semibold";

#[component]
fn RequestRow(request: ClaimRequest, vm: RequestsViewModel) -> impl IntoView {
    let reviewer = vm.session.with_untracked(|s| can_review(s.role()));
    let status = request.request_status;
    let id = request.request_id.clone().unwrap_or_default();
    let approve_id = id.clone();
    let reject_id = id.clone();
    let details = request.clone();

    view! {
        <tr class="transition-colors hover:bg-surface-muted">
            <td class="px-3 py-4 font-mono text-xs">{id}</td>
            <td class="whitespace-normal break-words px-3 py-4 text-sm text-fg-muted">{request.request_message}</td>
            <td class="px-3 py-4 font-mono text-xs">{request.item}</td>
            <td class="whitespace-nowrap px-3 py-4"><StatusBadge status=status/></td>
            <td class="px-3 py-4">
                <div class="flex flex-col items-center gap-2 sm:flex-row">
                    {(reviewer && show_approve(status)).then(|| view! {
                        <button
                            class=format!("{} bg-action-primary-bg text-action-primary-text", TABLE_BUTTON)
                            on:click=move |_| vm.review(approve_id.clone(), Review::Approve)
                        >
                            "Approve"
                        </button>
                    })}
                    {(reviewer && show_reject(status)).then(|| view! {
                        <button
                            class=format!("{} bg-action-danger-bg text-action-danger-text", TABLE_BUTTON)
                            on:click=move |_| vm.review(reject_id.clone(), Review::Reject)
                        >
                            "Reject"
                        </button>
                    })}
                    <button
                        class=format!("{} border border-border bg-surface-elevated text-fg", TABLE_BUTTON)
                        on:click=move |_| vm.open(details.clone())
                    >
                        "Details"
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[component]
pub fn RequestsPanel(scope: Signal<Option<RequestScope>>) -> impl IntoView {
    let vm = use_requests_view_model(scope);
    let title = move || scope.get().map(RequestScope::title).unwrap_or("Requests");
    let show_search = move || vm.session.with(|s| can_review(s.role()));

    view! {
        <div class="space-y-4 px-4 sm:px-0">
            <div class="flex w-full items-center gap-2">
                <h2 class="text-nowrap text-2xl font-bold text-fg">{title}</h2>
                <Show when=show_search>
                    <input
                        id="search"
                        type="search"
                        placeholder="Search"
                        class="ml-auto rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || vm.search_term.get()
                        on:input=move |ev| vm.set_search_term(event_target_value(&ev))
                    />
                </Show>
            </div>
            <InlineErrorMessage error=vm.error />
            <Show when=move || !vm.loading() fallback=|| view! { <LoadingSpinner /> }>
                <div class="overflow-x-auto rounded-lg bg-surface-elevated shadow">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Request Id"</th>
                                <th class="px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Message"</th>
                                <th class="px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Requested Item Id"</th>
                                <th class="px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Status"</th>
                                <th class="px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Action"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || vm.displayed.get()
                                key=|request| (request.request_id.clone(), request.request_status, request.request_message.clone())
                                children=move |request| view! { <RequestRow request=request vm=vm /> }
                            />
                            <Show when=move || vm.displayed.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="5" class="px-3 py-10 text-center text-sm text-fg-muted">
                                        "No requests found."
                                    </td>
                                </tr>
                            </Show>
                        </tbody>
                    </table>
                </div>
            </Show>
            <RequestQuickView vm=vm />
        </div>
    }
}
