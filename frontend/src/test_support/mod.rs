#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Item, ItemStatus, Role};
    use crate::state::session::SessionStore;
    use crate::state::token::encode_test_token;
    use crate::utils::{navigation::RecordingNavigator, storage::MemoryTokenStore};
    use leptos::*;
    use serde_json::json;
    use std::rc::Rc;

    pub fn token_for(role: Role, user_id: &str) -> String {
        encode_test_token(json!({
            "sub": user_id,
            "roles": format!("ROLE_{}", role.as_str()),
        }))
    }

    /// Puts an in-memory session and a client bound to it into context.
    pub fn provide_session(token: Option<String>, path: &str) -> (SessionStore, RecordingNavigator) {
        let tokens = token.map(MemoryTokenStore::with_token).unwrap_or_default();
        let navigator = RecordingNavigator::at(path);
        let session = SessionStore::restore(Rc::new(tokens), Rc::new(navigator.clone()));
        provide_context(session.clone());
        provide_context(session.api_client(Some("http://localhost:4444/laf/api/v1".into())));
        (session, navigator)
    }

    pub fn provide_role(role: Role) -> (SessionStore, RecordingNavigator) {
        provide_session(Some(token_for(role, "U001")), "/items/all")
    }

    pub fn found_item(id: &str, name: &str) -> Item {
        Item {
            item_id: Some(id.into()),
            item_name: name.into(),
            item_description: Some("Left on a bench".into()),
            location: Some("Library".into()),
            item_image_url: Some("/uploads/umbrella.png".into()),
            found_or_lost_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 14),
            item_status: Some(ItemStatus::Found),
            user: Some("U001".into()),
            create_at_date: Some("2025-03-14".into()),
            create_at_time: Some("09:30:00".into()),
            claimed_by: None,
        }
    }
}
