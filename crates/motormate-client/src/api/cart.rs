//! Storefront cart endpoints (`api/cart/{user}[/{vehicle}]`)

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{ListRequest, ResourceApi};
use crate::constants::api_path;
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{CartItem, PaginatedResponse};

#[derive(Clone)]
pub struct CartApi {
    http: Arc<MotormateHttpClient>,
}

impl CartApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self { http }
    }

    fn item_path(user_id: &str, vehicle_id: &str) -> String {
        format!("{}/{}/{}", api_path::CART, user_id, vehicle_id)
    }

    pub async fn items(&self, user_id: &str) -> Result<Vec<CartItem>> {
        self.http
            .get_json(&format!("{}/{}", api_path::CART, user_id), None)
            .await
    }

    pub async fn add(&self, user_id: &str, vehicle_id: &str) -> Result<CartItem> {
        self.http
            .post_json(&Self::item_path(user_id, vehicle_id), &json!({}))
            .await
    }

    pub async fn remove(&self, user_id: &str, vehicle_id: &str) -> Result<Value> {
        self.http
            .delete(&Self::item_path(user_id, vehicle_id))
            .await?
            .into_json()
    }
}

/// Cart of the user named in the request scope; items are keyed by vehicle id
#[derive(Clone)]
pub struct CartSource {
    api: CartApi,
}

impl CartSource {
    pub fn new(api: CartApi) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &CartApi {
        &self.api
    }
}

#[async_trait]
impl ResourceApi for CartSource {
    type Item = CartItem;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<CartItem>> {
        let user_id = request.require_scope()?;
        Ok(PaginatedResponse::new(self.api.items(user_id).await?, None))
    }
}
