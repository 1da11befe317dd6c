use crate::api::{ApiClient, ApiError, ClaimRequest, Item, Role};
use std::rc::Rc;

/// Which list `/requests/:scope` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    All,
    Mine,
}

impl RequestScope {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(RequestScope::All),
            "my-requests" => Some(RequestScope::Mine),
            _ => None,
        }
    }

    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            RequestScope::All => &[Role::Admin, Role::Staff],
            RequestScope::Mine => &Role::ALL,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RequestScope::All => "All Requests",
            RequestScope::Mine => "My Requests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    Approve,
    Reject,
}

#[derive(Clone)]
pub struct RequestsRepository {
    client: Rc<ApiClient>,
}

impl RequestsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(
        &self,
        scope: RequestScope,
        user_id: Option<&str>,
    ) -> Result<Vec<ClaimRequest>, ApiError> {
        match (scope, user_id) {
            (RequestScope::All, _) => self.client.get_all_claim_requests().await,
            (RequestScope::Mine, Some(id)) => self.client.get_claim_requests_by_user(id).await,
            (RequestScope::Mine, None) => Err(ApiError::forbidden(
                "Your session does not identify a user.",
            )),
        }
    }

    pub async fn search(&self, term: &str) -> Result<Vec<ClaimRequest>, ApiError> {
        self.client.search_claim_requests(term.trim()).await
    }

    pub async fn review(&self, request_id: &str, review: Review) -> Result<(), ApiError> {
        match review {
            Review::Approve => self.client.approve_claim_request(request_id).await,
            Review::Reject => self.client.reject_claim_request(request_id).await,
        }
    }

    pub async fn update(&self, request: &ClaimRequest) -> Result<ClaimRequest, ApiError> {
        self.client.update_claim_request(request).await
    }

    pub async fn requested_item(&self, item_id: &str) -> Result<Item, ApiError> {
        self.client.get_item(item_id).await
    }
}
