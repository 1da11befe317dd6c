use super::view_model::{read_image, use_item_form_view_model};
use crate::{
    components::{
        common::{Button, ButtonVariant, TextField},
        error::InlineErrorMessage,
    },
    config,
};
use leptos::{ev::SubmitEvent, *};
use wasm_bindgen::JsCast;

#[component]
pub fn ItemFormPanel(#[prop(optional_no_strip)] item_id: Option<String>) -> impl IntoView {
    let vm = use_item_form_view_model(item_id);
    let pending = vm.save_action.pending();
    let existing_image = move || {
        vm.base.with(|item| {
            item.item_image_url
                .as_deref()
                .map(|path| config::asset_url(&config::current_api_base_url(), path))
        })
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let on_image = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            spawn_local(async move {
                match read_image(file).await {
                    Ok(upload) => vm.image.set(Some(upload)),
                    Err(err) => vm.error.set(Some(err)),
                }
            });
        }
    };

    view! {
        <div class="mx-auto max-w-2xl px-4 py-4 sm:px-6 sm:py-6 lg:max-w-7xl lg:px-8">
            <form on:submit=on_submit novalidate=true class="space-y-8">
                <h2 class="border-b border-border text-base font-semibold text-fg">"Item Information"</h2>
                <div class="flex flex-col items-center rounded-lg border border-dashed border-border-strong py-6">
                    {move || existing_image().map(|src| view! {
                        <img src=src alt="Current item" class="mb-2 h-64 object-contain"/>
                    })}
                    {move || vm.image.with(|image| image.as_ref().map(|image| image.file_name.clone())).map(|name| view! {
                        <p class="text-sm text-fg-muted">{name}</p>
                    })}
                    <label for="image" class="cursor-pointer rounded-md p-2 text-sm font-semibold text-action-primary-bg">
                        {move || {
                            if vm.image.with(Option::is_some) || existing_image().is_some() {
                                "Change file"
                            } else {
                                "Upload a file"
                            }
                        }}
                        <input id="image" name="image" type="file" accept="image/*" class="sr-only" on:change=on_image/>
                    </label>
                </div>
                <div class="grid grid-cols-1 gap-x-6 gap-y-6 sm:grid-cols-3">
                    <TextField id="itemName" label="Item name" value=vm.item_name />
                    <TextField id="location" label="Location" value=vm.location />
                    <TextField id="foundOrLostDate" label="Found or Lost Date" value=vm.date input_type="date" />
                </div>
                <div>
                    <label for="itemDescription" class="block text-sm font-medium text-fg">"Description"</label>
                    <textarea
                        id="itemDescription"
                        rows="3"
                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-fg"
                        prop:value=move || vm.description.get()
                        on:input=move |ev| vm.description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <InlineErrorMessage error=vm.error />
                <div class="flex items-center justify-end gap-x-4">
                    <Button variant=ButtonVariant::Ghost attr:type="button" on:click=move |_| vm.reset()>
                        "Reset"
                    </Button>
                    <Button loading=pending attr:type="submit">
                        {move || match (vm.is_edit(), pending.get()) {
                            (true, true) => "Updating...",
                            (true, false) => "Update",
                            (false, true) => "Saving...",
                            (false, false) => "Save",
                        }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
