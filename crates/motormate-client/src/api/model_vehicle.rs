//! Vehicle model endpoints (`api/model`)

use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{CrudEndpoint, ListRequest, ResourceApi};
use crate::constants::api_path;
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{ModelVehicle, PaginatedResponse};

#[derive(Clone)]
pub struct ModelVehicleApi {
    crud: CrudEndpoint<ModelVehicle>,
}

impl ModelVehicleApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self {
            crud: CrudEndpoint::new(http, api_path::MODEL),
        }
    }

    /// Models belonging to one collection
    pub async fn by_collection(&self, collection_id: &str) -> Result<Vec<ModelVehicle>> {
        self.crud
            .http_client()
            .get_json(
                &format!("{}/{}", api_path::MODEL_BY_COLLECTION, collection_id),
                None,
            )
            .await
    }
}

impl Deref for ModelVehicleApi {
    type Target = CrudEndpoint<ModelVehicle>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}

#[async_trait]
impl ResourceApi for ModelVehicleApi {
    type Item = ModelVehicle;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<ModelVehicle>> {
        self.crud.list(&request.params).await
    }

    async fn details(&self, key: &str) -> Result<ModelVehicle> {
        self.crud.details(key).await
    }

    async fn create(&self, values: &Value) -> Result<ModelVehicle> {
        self.crud.create(values).await
    }

    async fn update(&self, key: &str, values: &Value) -> Result<ModelVehicle> {
        self.crud.update(key, values).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.crud.delete(key).await
    }
}
