use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    pages::{
        forbidden::ForbiddenPage,
        item_form::{AddItemPage, EditItemPage},
        items::ItemsPage,
        requests::RequestsPage,
        sign_in::SignInPage,
        sign_up::SignUpPage,
        users::UsersPage,
    },
    state::session::AuthProvider,
    utils::navigation,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    navigation::SIGN_IN_PATH,
    navigation::SIGN_UP_PATH,
    navigation::FORBIDDEN_PATH,
    "/items/add-items",
    "/items/edit-item/:id",
    "/items/:scope",
    "/requests/:scope",
    "/all-users",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/items/add-items",
    "/items/edit-item/:id",
    "/items/:scope",
    "/requests/:scope",
    "/all-users",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    navigation::SIGN_IN_PATH,
    navigation::SIGN_UP_PATH,
    navigation::FORBIDDEN_PATH,
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Lost & Found"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomeRedirect/>
                    <Route path=navigation::SIGN_IN_PATH view=SignInPage/>
                    <Route path=navigation::SIGN_UP_PATH view=SignUpPage/>
                    <Route path=navigation::FORBIDDEN_PATH view=ForbiddenPage/>
                    <Route path="/items/add-items" view=AddItemPage/>
                    <Route path="/items/edit-item/:id" view=EditItemPage/>
                    <Route path="/items/:scope" view=ItemsPage/>
                    <Route path="/requests/:scope" view=RequestsPage/>
                    <Route path="/all-users" view=UsersPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path=navigation::HOME_PATH/> }
}
