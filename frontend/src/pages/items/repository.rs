use crate::api::{ApiClient, ApiError, ClaimRequest, ImageUpload, Item, ItemStatus};
use std::rc::Rc;

/// Which list `/items/:scope` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemScope {
    All,
    Status(ItemStatus),
    Mine,
}

impl ItemScope {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(ItemScope::All),
            "lost" => Some(ItemScope::Status(ItemStatus::Lost)),
            "found" => Some(ItemScope::Status(ItemStatus::Found)),
            "claimed" => Some(ItemScope::Status(ItemStatus::Claimed)),
            "user" => Some(ItemScope::Mine),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ItemScope::All => "All Items",
            ItemScope::Status(ItemStatus::Lost) => "Lost Items",
            ItemScope::Status(ItemStatus::Found) => "Found Items",
            ItemScope::Status(ItemStatus::Claimed) => "Claimed Items",
            ItemScope::Mine => "My Items",
        }
    }
}

#[derive(Clone)]
pub struct ItemsRepository {
    client: Rc<ApiClient>,
}

impl ItemsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self, scope: ItemScope, user_id: Option<&str>) -> Result<Vec<Item>, ApiError> {
        match scope {
            ItemScope::All => self.client.get_all_items().await,
            ItemScope::Status(status) => self.client.get_items_by_status(status).await,
            ItemScope::Mine => match user_id {
                Some(id) => self.client.get_items_by_user(id).await,
                None => Ok(Vec::new()),
            },
        }
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Item>, ApiError> {
        self.client.search_items(term.trim()).await
    }

    pub async fn fetch(&self, item_id: &str) -> Result<Item, ApiError> {
        self.client.get_item(item_id).await
    }

    pub async fn delete(&self, item_id: &str) -> Result<(), ApiError> {
        self.client.delete_item(item_id).await
    }

    pub async fn request_claim(&self, item_id: &str, message: &str) -> Result<ClaimRequest, ApiError> {
        let request = ClaimRequest {
            item: item_id.to_string(),
            request_message: message.trim().to_string(),
            ..ClaimRequest::default()
        };
        self.client.create_claim_request(&request).await
    }

    pub async fn save(&self, item: Item, image: Option<ImageUpload>) -> Result<Item, ApiError> {
        if item.item_id.is_some() {
            self.client.update_item(&item, image).await
        } else {
            self.client.create_item(&item, image).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_scopes() {
        assert_eq!(ItemScope::parse("all"), Some(ItemScope::All));
        assert_eq!(ItemScope::parse("found"), Some(ItemScope::Status(ItemStatus::Found)));
        assert_eq!(ItemScope::parse("user"), Some(ItemScope::Mine));
        assert_eq!(ItemScope::parse("FOUND"), None);
        assert_eq!(ItemScope::parse("add-items"), None);
    }
}
