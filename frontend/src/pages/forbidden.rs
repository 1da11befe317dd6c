use crate::utils::navigation;
use leptos::*;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-surface px-6 text-center">
            <p class="text-base font-semibold text-action-primary-bg">"403"</p>
            <h1 class="mt-4 text-4xl font-bold tracking-tight text-fg">"Access denied"</h1>
            <p class="mt-6 text-base text-fg-muted">"You do not have permission to view this page."</p>
            <a
                href=navigation::HOME_PATH
                class="mt-10 rounded-md bg-action-primary-bg px-3.5 py-2.5 text-sm font-semibold text-action-primary-text shadow-sm"
            >
                "Go back to items"
            </a>
        </div>
    }
}
