use super::{
    client::{parse_json, ApiClient},
    types::{ApiError, User},
};

impl ApiClient {
    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(&["user", "getAllUsers"]).await
    }

    pub async fn search_users(&self, term: &str) -> Result<Vec<User>, ApiError> {
        self.get_json(&["user", "search", term]).await
    }

    pub async fn update_user(&self, user: &User) -> Result<User, ApiError> {
        let url = self.endpoint(&["user", "change", &user.id]).await;
        let response = self
            .send_authorized(self.http_client().patch(&url).json(user))
            .await?;
        parse_json(response).await
    }
}
