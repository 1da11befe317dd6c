use super::{
    client::{expect_success, parse_json, ApiClient},
    types::{ApiError, ClaimRequest},
};

impl ApiClient {
    pub async fn create_claim_request(&self, request: &ClaimRequest) -> Result<ClaimRequest, ApiError> {
        let url = self.endpoint(&["request"]).await;
        let response = self
            .send_authorized(self.http_client().post(&url).json(request))
            .await?;
        parse_json(response).await
    }

    pub async fn update_claim_request(&self, request: &ClaimRequest) -> Result<ClaimRequest, ApiError> {
        let id = request
            .request_id
            .as_deref()
            .ok_or_else(|| ApiError::validation("Request id is missing"))?;
        let url = self.endpoint(&["request", id]).await;
        let response = self
            .send_authorized(self.http_client().patch(&url).json(request))
            .await?;
        parse_json(response).await
    }

    pub async fn get_all_claim_requests(&self) -> Result<Vec<ClaimRequest>, ApiError> {
        self.get_json(&["request", "getAllRequests"]).await
    }

    pub async fn get_claim_requests_by_user(&self, user_id: &str) -> Result<Vec<ClaimRequest>, ApiError> {
        self.get_json(&["request", "getUserRequests", user_id]).await
    }

    pub async fn search_claim_requests(&self, term: &str) -> Result<Vec<ClaimRequest>, ApiError> {
        self.get_json(&["request", "search", term]).await
    }

    pub async fn approve_claim_request(&self, request_id: &str) -> Result<(), ApiError> {
        self.review(request_id, "approve").await
    }

    pub async fn reject_claim_request(&self, request_id: &str) -> Result<(), ApiError> {
        self.review(request_id, "reject").await
    }

    async fn review(&self, request_id: &str, decision: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["request", decision, request_id]).await;
        let response = self.send_authorized(self.http_client().patch(&url)).await?;
        expect_success(response).await
    }
}
