use crate::{api::RequestStatus, pages::requests::utils::status_badge_class};
use leptos::*;

#[component]
pub fn StatusBadge(status: Option<RequestStatus>) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex rounded-full px-2 text-center text-xs font-semibold leading-5 {}",
            status_badge_class(status)
        )>
            {status.map(RequestStatus::as_str).unwrap_or_default()}
        </span>
    }
}
