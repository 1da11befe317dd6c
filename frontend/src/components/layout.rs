use crate::{api::Role, state::session::use_session};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    roles: &'static [Role],
}

pub const STATUS_LINKS: &[NavLink] = &[
    NavLink { label: "All", href: "/items/all", roles: &Role::ALL },
    NavLink { label: "Lost", href: "/items/lost", roles: &Role::ALL },
    NavLink { label: "Found", href: "/items/found", roles: &Role::ALL },
    NavLink { label: "Claimed", href: "/items/claimed", roles: &Role::ALL },
];

pub const ROLE_LINKS: &[NavLink] = &[
    NavLink { label: "My Items", href: "/items/user", roles: &Role::ALL },
    NavLink { label: "My Requests", href: "/requests/my-requests", roles: &[Role::User] },
    NavLink {
        label: "Received Requests",
        href: "/requests/all",
        roles: &[Role::Admin, Role::Staff],
    },
    NavLink { label: "User Management", href: "/all-users", roles: &[Role::Admin] },
];

/// Links shown for `role`; an unknown role only gets the links open to all.
pub fn visible_links(role: Option<Role>) -> Vec<NavLink> {
    ROLE_LINKS
        .iter()
        .filter(|link| match role {
            Some(role) => link.roles.contains(&role),
            None => link.roles.len() == Role::ALL.len(),
        })
        .copied()
        .collect()
}

const LINK_CLASS: &str = "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";
const MOBILE_LINK_CLASS: &str = "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let (menu_open, set_menu_open) = create_signal(false);
    let role_links = create_memo(move |_| visible_links(state.get().role()));

    let on_logout = {
        let session = session.clone();
        move |_: web_sys::MouseEvent| {
            set_menu_open.set(false);
            session.logout();
        }
    };
    let on_logout_mobile = on_logout.clone();
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let close_menu = move |_: web_sys::MouseEvent| set_menu_open.set(false);

    let links = move |class: &'static str| {
        STATUS_LINKS
            .iter()
            .map(|link| view! { <a href=link.href class=class on:click=close_menu>{link.label}</a> })
            .collect_view()
    };
    let extra_links = move |class: &'static str| {
        move || {
            role_links
                .get()
                .into_iter()
                .map(|link| view! { <a href=link.href class=class on:click=close_menu>{link.label}</a> })
                .collect_view()
        }
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border sticky top-0 z-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/items/all" class="text-xl font-semibold text-fg">"Lost & Found"</a>
                    <div class="flex items-center">
                        <nav class="hidden md:flex space-x-1">
                            {links(LINK_CLASS)}
                        </nav>
                        <nav class="hidden md:flex items-center ml-4 space-x-1">
                            {extra_links(LINK_CLASS)}
                            <button
                                on:click=on_logout
                                class="ml-3 px-3 py-1 rounded-lg text-sm font-medium bg-action-primary-bg text-action-primary-text hover:opacity-90"
                            >
                                "Log Out"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close main menu" } else { "Open main menu" }}
                            </span>
                            <i class=move || if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }></i>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {links(MOBILE_LINK_CLASS)}
                            <div class="border-t border-border my-2"></div>
                            {extra_links(MOBILE_LINK_CLASS)}
                            <button
                                on:click=on_logout_mobile.clone()
                                class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Log Out"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            {title.map(|title| view! {
                <div class="bg-surface-elevated shadow-sm">
                    <h1 class="max-w-7xl mx-auto px-4 py-2 sm:px-6 lg:px-8 text-3xl font-bold tracking-tight text-fg">
                        {title}
                    </h1>
                </div>
            })}
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
