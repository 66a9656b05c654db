//! Shared CRUD endpoint table: `api/<resource>[/all|/{id}]`

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{ListRequest, ResourceApi};
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{Entity, PaginatedResponse, SearchParams};

/// all/list/details/create/update/delete over one base path
pub struct CrudEndpoint<T> {
    http: Arc<MotormateHttpClient>,
    base: &'static str,
    all_path: Option<&'static str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for CrudEndpoint<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base: self.base,
            all_path: self.all_path,
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> CrudEndpoint<T> {
    pub fn new(http: Arc<MotormateHttpClient>, base: &'static str) -> Self {
        Self {
            http,
            base,
            all_path: None,
            _marker: PhantomData,
        }
    }

    /// Override the `all()` path (defaults to `<base>/all`)
    pub fn with_all_path(mut self, path: &'static str) -> Self {
        self.all_path = Some(path);
        self
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn http_client(&self) -> &Arc<MotormateHttpClient> {
        &self.http
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.base, id)
    }

    pub async fn all(&self) -> Result<Vec<T>> {
        match self.all_path {
            Some(path) => self.http.get_json(path, None).await,
            None => {
                self.http
                    .get_json(&format!("{}/all", self.base), None)
                    .await
            }
        }
    }

    pub async fn list(&self, params: &SearchParams) -> Result<PaginatedResponse<T>> {
        self.http.get_page(self.base, Some(params)).await
    }

    pub async fn details(&self, id: &str) -> Result<T> {
        self.http.get_json(&self.item_path(id), None).await
    }

    pub async fn create<B: Serialize + Sync + ?Sized>(&self, values: &B) -> Result<T> {
        self.http.post_json(self.base, values).await
    }

    pub async fn update<B: Serialize + Sync + ?Sized>(&self, id: &str, values: &B) -> Result<T> {
        self.http.put_json(&self.item_path(id), values).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.http.delete(&self.item_path(id)).await?;
        Ok(())
    }
}

#[async_trait]
impl<T: Entity> ResourceApi for CrudEndpoint<T> {
    type Item = T;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<T>> {
        CrudEndpoint::list(self, &request.params).await
    }

    async fn details(&self, key: &str) -> Result<T> {
        CrudEndpoint::details(self, key).await
    }

    async fn create(&self, values: &Value) -> Result<T> {
        CrudEndpoint::create(self, values).await
    }

    async fn update(&self, key: &str, values: &Value) -> Result<T> {
        CrudEndpoint::update(self, key, values).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        CrudEndpoint::delete(self, key).await
    }
}
