use crate::api::{ClaimRequest, RequestStatus, Role};

pub fn status_badge_class(status: Option<RequestStatus>) -> &'static str {
    match status {
        Some(RequestStatus::Pending) => "bg-status-warning-bg text-status-warning-text",
        Some(RequestStatus::Approved) => "bg-status-success-bg text-status-success-text",
        Some(RequestStatus::Rejected) => "bg-status-error-bg text-status-error-text",
        None => "",
    }
}

pub fn show_approve(status: Option<RequestStatus>) -> bool {
    status != Some(RequestStatus::Approved)
}

pub fn show_reject(status: Option<RequestStatus>) -> bool {
    status != Some(RequestStatus::Rejected)
}

pub fn can_review(role: Option<Role>) -> bool {
    role.is_some_and(Role::is_staff_or_admin)
}

/// Users may reword a pending request; staff may reopen a rejected one.
pub fn can_edit(request: &ClaimRequest, role: Option<Role>) -> bool {
    match role {
        Some(Role::User) => request.request_status == Some(RequestStatus::Pending),
        Some(_) => request.request_status == Some(RequestStatus::Rejected),
        None => false,
    }
}

/// Swaps in the server's copy of an edited request.
pub fn replace_request(list: &mut [ClaimRequest], updated: &ClaimRequest) {
    if let Some(slot) = list
        .iter_mut()
        .find(|request| request.request_id.is_some() && request.request_id == updated.request_id)
    {
        *slot = updated.clone();
    }
}

pub fn joined(date: Option<&str>, time: Option<&str>) -> Option<String> {
    match (date, time) {
        (Some(date), Some(time)) => Some(format!("{} {}", date, time)),
        (Some(date), None) => Some(date.to_string()),
        _ => None,
    }
}
