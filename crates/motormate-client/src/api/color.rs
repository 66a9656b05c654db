//! Color endpoints
//!
//! The color resource has no paginated list; `list` serves `all()` without
//! metadata so a slice can still drive it.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{CrudEndpoint, ListRequest, ResourceApi};
use crate::constants::api_path;
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{Color, PaginatedResponse};

#[derive(Clone)]
pub struct ColorApi {
    crud: CrudEndpoint<Color>,
}

impl ColorApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self {
            crud: CrudEndpoint::new(http, api_path::COLOR),
        }
    }

    pub async fn all(&self) -> Result<Vec<Color>> {
        self.crud.all().await
    }

    pub async fn details(&self, id: &str) -> Result<Color> {
        self.crud.details(id).await
    }

    pub async fn create<B: Serialize + Sync + ?Sized>(&self, values: &B) -> Result<Color> {
        self.crud.create(values).await
    }

    /// Create several colors in one call
    pub async fn bulk_create<B: Serialize + Sync + ?Sized>(&self, values: &B) -> Result<Vec<Color>> {
        self.crud
            .http_client()
            .post_json(api_path::COLOR_BULK, values)
            .await
    }

    pub async fn update<B: Serialize + Sync + ?Sized>(&self, id: &str, values: &B) -> Result<Color> {
        self.crud.update(id, values).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.crud.delete(id).await
    }
}

#[async_trait]
impl ResourceApi for ColorApi {
    type Item = Color;

    async fn list(&self, _request: &ListRequest) -> Result<PaginatedResponse<Color>> {
        Ok(PaginatedResponse::new(self.all().await?, None))
    }

    async fn details(&self, key: &str) -> Result<Color> {
        ColorApi::details(self, key).await
    }

    async fn create(&self, values: &Value) -> Result<Color> {
        ColorApi::create(self, values).await
    }

    async fn update(&self, key: &str, values: &Value) -> Result<Color> {
        ColorApi::update(self, key, values).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        ColorApi::delete(self, key).await
    }
}
