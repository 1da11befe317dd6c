use reqwest::multipart::{Form, Part};

use super::{
    client::{expect_success, parse_json, ApiClient},
    types::{ApiError, ImageUpload, Item, ItemStatus},
};

fn image_part(image: ImageUpload) -> Result<Part, ApiError> {
    Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.mime_type)
        .map_err(|e| ApiError::validation(format!("Unsupported image type: {}", e)))
}

fn item_id(item: &Item) -> Result<&str, ApiError> {
    item.item_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::validation("Item id is missing"))
}

impl ApiClient {
    pub async fn get_all_items(&self) -> Result<Vec<Item>, ApiError> {
        self.get_json(&["item", "getAllItems"]).await
    }

    pub async fn get_items_by_user(&self, user_id: &str) -> Result<Vec<Item>, ApiError> {
        self.get_json(&["item", "getItemsByUserId", user_id]).await
    }

    pub async fn get_items_by_status(&self, status: ItemStatus) -> Result<Vec<Item>, ApiError> {
        self.get_json(&["item", "getItemsByStatus", status.as_str()])
            .await
    }

    pub async fn get_item(&self, item_id: &str) -> Result<Item, ApiError> {
        self.get_json(&["item", item_id]).await
    }

    pub async fn search_items(&self, term: &str) -> Result<Vec<Item>, ApiError> {
        self.get_json(&["item", "search", term]).await
    }

    /// Creates an item; the server requires an image alongside the record.
    pub async fn create_item(
        &self,
        item: &Item,
        image: Option<ImageUpload>,
    ) -> Result<Item, ApiError> {
        let image = image.ok_or_else(|| ApiError::validation("Please select an image file"))?;
        let dto = serde_json::to_vec(item)
            .map_err(|e| ApiError::unknown(format!("Failed to serialize item: {}", e)))?;
        let dto_part = Part::bytes(dto)
            .mime_str("application/json")
            .map_err(|e| ApiError::unknown(format!("Failed to build item part: {}", e)))?;
        let form = Form::new()
            .part("itemDTO", dto_part)
            .part("imgFile", image_part(image)?);

        let url = self.endpoint(&["item"]).await;
        let response = self
            .send_authorized(self.http_client().post(&url).multipart(form))
            .await?;
        parse_json(response).await
    }

    /// Replaces the image first when a new one is given, then patches the record.
    pub async fn update_item(
        &self,
        item: &Item,
        image: Option<ImageUpload>,
    ) -> Result<Item, ApiError> {
        let id = item_id(item)?;

        if let Some(image) = image {
            let form = Form::new().part("imgFile", image_part(image)?);
            let url = self.endpoint(&["item", "updateItemImg", id]).await;
            let response = self
                .send_authorized(self.http_client().patch(&url).multipart(form))
                .await?;
            expect_success(response).await?;
        }

        let url = self.endpoint(&["item", id]).await;
        let response = self
            .send_authorized(self.http_client().patch(&url).json(item))
            .await?;
        parse_json(response).await
    }

    pub async fn delete_item(&self, item_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["item", item_id]).await;
        let response = self.send_authorized(self.http_client().delete(&url)).await?;
        expect_success(response).await
    }
}
