use crate::{
    api::{ApiError, Item, ItemStatus, Role},
    state::session::SessionState,
};
use chrono::NaiveDate;

pub fn status_badge_class(status: Option<ItemStatus>) -> &'static str {
    match status {
        Some(ItemStatus::Lost) => "bg-status-error-bg text-status-error-text",
        Some(ItemStatus::Found) => "bg-status-info-bg text-status-info-text",
        Some(ItemStatus::Claimed) => "bg-status-success-bg text-status-success-text",
        None => "bg-surface-muted text-fg-muted",
    }
}

/// Owners and admins may edit or delete any of their items; staff may do so
/// for everything that is not a lost report.
pub fn can_manage(item: &Item, session: &SessionState) -> bool {
    let owns = match (session.user_id(), item.user.as_deref()) {
        (Some(me), Some(owner)) => me == owner,
        _ => false,
    };
    owns || match session.role() {
        Some(Role::Admin) => true,
        Some(Role::Staff) => item.item_status != Some(ItemStatus::Lost),
        _ => false,
    }
}

/// Only found items can be claimed.
pub fn can_request(item: &Item) -> bool {
    item.item_status == Some(ItemStatus::Found)
}

/// Drops `item` from a displayed list.
pub fn without_item(items: &mut Vec<Item>, item_id: &str) {
    items.retain(|item| item.item_id.as_deref() != Some(item_id));
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFormState {
    pub item_id: Option<String>,
    pub item_name: String,
    pub location: String,
    pub date: String,
    pub description: String,
}

impl ItemFormState {
    pub fn from_item(item: &Item) -> Self {
        Self {
            item_id: item.item_id.clone(),
            item_name: item.item_name.clone(),
            location: item.location.clone().unwrap_or_default(),
            date: item
                .found_or_lost_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            description: item.item_description.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.item_id.is_some()
    }

    /// Merges the form onto `base` so server-owned fields survive an edit.
    pub fn to_item(&self, base: Item) -> Result<Item, ApiError> {
        if self.item_name.trim().is_empty() {
            return Err(ApiError::validation("Item name is required"));
        }
        if self.date.trim().is_empty() {
            return Err(ApiError::validation("Date is required"));
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::validation("Date must be YYYY-MM-DD"))?;
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Ok(Item {
            item_id: self.item_id.clone(),
            item_name: self.item_name.trim().to_string(),
            location: optional(&self.location),
            item_description: optional(&self.description),
            found_or_lost_date: Some(date),
            ..base
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::token::Identity;

    fn session(role: Role, user_id: &str) -> SessionState {
        SessionState {
            token: Some("t".into()),
            identity: Some(Identity {
                role,
                user_id: user_id.into(),
            }),
        }
    }

    fn item(owner: &str, status: ItemStatus) -> Item {
        Item {
            item_id: Some("I1".into()),
            item_name: "Keys".into(),
            user: Some(owner.into()),
            item_status: Some(status),
            ..Item::default()
        }
    }

    #[test]
    fn management_rights_follow_owner_and_role() {
        let lost = item("U9", ItemStatus::Lost);
        let found = item("U9", ItemStatus::Found);

        assert!(can_manage(&lost, &session(Role::User, "U9")));
        assert!(!can_manage(&found, &session(Role::User, "U1")));
        assert!(can_manage(&lost, &session(Role::Admin, "U1")));
        assert!(!can_manage(&lost, &session(Role::Staff, "U1")));
        assert!(can_manage(&found, &session(Role::Staff, "U1")));
        assert!(!can_manage(&found, &SessionState::default()));
    }

    #[test]
    fn only_found_items_can_be_requested() {
        assert!(can_request(&item("U1", ItemStatus::Found)));
        assert!(!can_request(&item("U1", ItemStatus::Lost)));
        assert!(!can_request(&item("U1", ItemStatus::Claimed)));
    }

    #[test]
    fn form_requires_name_then_date() {
        let mut form = ItemFormState::default();
        assert_eq!(form.to_item(Item::default()).unwrap_err().error, "Item name is required");
        form.item_name = "Umbrella".into();
        assert_eq!(form.to_item(Item::default()).unwrap_err().error, "Date is required");
        form.date = "14/03/2025".into();
        assert_eq!(form.to_item(Item::default()).unwrap_err().code, "VALIDATION_ERROR");
    }

    #[test]
    fn edit_keeps_server_fields() {
        let existing = Item {
            item_id: Some("I7".into()),
            item_name: "Old".into(),
            item_status: Some(ItemStatus::Found),
            item_image_url: Some("/uploads/i7.png".into()),
            found_or_lost_date: NaiveDate::from_ymd_opt(2025, 1, 2),
            ..Item::default()
        };
        let mut form = ItemFormState::from_item(&existing);
        assert_eq!(form.date, "2025-01-02");
        form.item_name = " New name ".into();
        form.location = "   ".into();

        let updated = form.to_item(existing.clone()).unwrap();
        assert_eq!(updated.item_name, "New name");
        assert_eq!(updated.location, None);
        assert_eq!(updated.item_status, Some(ItemStatus::Found));
        assert_eq!(updated.item_image_url, existing.item_image_url);
    }

    #[test]
    fn without_item_removes_by_id() {
        let mut items = vec![item("U1", ItemStatus::Found), Item { item_id: Some("I2".into()), ..Item::default() }];
        without_item(&mut items, "I1");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_id.as_deref(), Some("I2"));
    }
}
