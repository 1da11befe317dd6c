use super::{
    utils::parse_role,
    view_model::{use_users_view_model, UsersViewModel},
};
use crate::{
    api::{Role, User},
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
};
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded border border-form-control-border bg-form-control-bg px-1 py-1 text-sm text-fg";

fn edit_field(vm: UsersViewModel, input_type: &'static str, read: fn(&User) -> String, write: fn(&mut User, String)) -> impl IntoView {
    view! {
        <input
            type=input_type
            class=INPUT_CLASS
            prop:value=move || vm.editing.with(|edit| edit.as_ref().map(read).unwrap_or_default())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                vm.editing.update(|edit| {
                    if let Some(user) = edit {
                        write(user, value);
                    }
                });
            }
        />
    }
}

#[component]
fn UserRow(user: User, vm: UsersViewModel) -> impl IntoView {
    let id = user.id.clone();
    let editing = {
        let id = id.clone();
        move || vm.is_editing(&id)
    };
    let saving = {
        let id = id.clone();
        move || vm.saving_id.with(|saving| saving.as_deref() == Some(id.as_str()))
    };
    let role_label = user.role.map(Role::as_str).unwrap_or_default();
    let name = user.name.clone();
    let email = user.email.clone();
    let joined = user.created_at.clone().unwrap_or_default();
    let editing_name = editing.clone();
    let editing_email = editing.clone();
    let editing_role = editing.clone();
    let editing_actions = editing.clone();

    view! {
        <tr>
            <td class="hidden px-3 py-4 font-mono text-xs lg:table-cell">{id.clone()}</td>
            <td class="whitespace-nowrap px-3 py-4 text-sm font-bold text-fg">
                {move || if editing_name() {
                    edit_field(vm, "text", |u| u.name.clone(), |u, v| u.name = v).into_view()
                } else {
                    name.clone().into_view()
                }}
            </td>
            <td class="hidden px-3 py-4 text-sm text-fg-muted md:table-cell">
                {move || if editing_email() {
                    edit_field(vm, "email", |u| u.email.clone(), |u, v| u.email = v).into_view()
                } else {
                    email.clone().into_view()
                }}
            </td>
            <td class="px-3 py-4 text-sm">
                {move || if editing_role() {
                    view! {
                        <select
                            class=INPUT_CLASS
                            on:change=move |ev| {
                                let role = parse_role(&event_target_value(&ev));
                                vm.editing.update(|edit| {
                                    if let Some(user) = edit {
                                        user.role = role;
                                    }
                                });
                            }
                        >
                            {Role::ALL
                                .iter()
                                .map(|role| {
                                    let selected = role.as_str() == role_label;
                                    view! { <option value=role.as_str() selected=selected>{role.as_str()}</option> }
                                })
                                .collect_view()}
                        </select>
                    }
                    .into_view()
                } else {
                    role_label.into_view()
                }}
            </td>
            <td class="hidden px-3 py-4 text-xs text-fg-muted lg:table-cell">{joined}</td>
            <td class="px-3 py-4">
                {move || {
                    if saving() {
                        view! { <span class="text-xs text-fg-muted">"Saving..."</span> }.into_view()
                    } else if editing_actions() {
                        view! {
                            <div class="flex gap-2">
                                <Button on:click=move |_| vm.save()>"Save"</Button>
                                <Button variant=ButtonVariant::Ghost on:click=move |_| vm.cancel_edit()>"Cancel"</Button>
                            </div>
                        }
                        .into_view()
                    } else {
                        let user = user.clone();
                        view! {
                            <Button variant=ButtonVariant::Secondary on:click=move |_| vm.edit(user.clone())>
                                "Edit"
                            </Button>
                        }
                        .into_view()
                    }
                }}
            </td>
        </tr>
    }
}

#[component]
pub fn UsersPanel() -> impl IntoView {
    let vm = use_users_view_model();

    view! {
        <div class="space-y-4 px-4 sm:px-0">
            <div class="flex w-full items-center gap-2">
                <h2 class="text-nowrap text-2xl font-bold text-fg">"User Management"</h2>
                <input
                    id="search"
                    type="search"
                    placeholder="Search"
                    class="ml-auto rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                    prop:value=move || vm.search_term.get()
                    on:input=move |ev| vm.set_search_term(event_target_value(&ev))
                />
            </div>
            <InlineErrorMessage error=vm.error />
            <Show when=move || !vm.loading() fallback=|| view! { <LoadingSpinner /> }>
                <div class="overflow-x-auto rounded-lg bg-surface-elevated shadow">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="hidden px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted lg:table-cell">"ID"</th>
                                <th class="px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Name"</th>
                                <th class="hidden px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted md:table-cell">"Email"</th>
                                <th class="px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Role"</th>
                                <th class="hidden px-3 py-3 text-left text-xs font-medium uppercase text-fg-muted lg:table-cell">"Joined Date"</th>
                                <th class="px-3 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || vm.displayed.get()
                                key=|user| (user.id.clone(), user.name.clone(), user.email.clone(), user.role)
                                children=move |user| view! { <UserRow user=user vm=vm /> }
                            />
                            <Show when=move || vm.displayed.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="6" class="px-3 py-10 text-center text-sm text-fg-muted">
                                        "No users found."
                                    </td>
                                </tr>
                            </Show>
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
