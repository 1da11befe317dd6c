use crate::api::{ApiClient, ApiError, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl UsersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.get_all_users().await
    }

    pub async fn search(&self, term: &str) -> Result<Vec<User>, ApiError> {
        self.client.search_users(term.trim()).await
    }

    pub async fn save(&self, user: &User) -> Result<User, ApiError> {
        self.client.update_user(user).await
    }
}
