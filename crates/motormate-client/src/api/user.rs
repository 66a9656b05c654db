//! User endpoints; item routes are keyed by username

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{CrudEndpoint, ListRequest, ResourceApi};
use crate::constants::api_path;
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{PaginatedResponse, Role, RoleUpdate, SearchParams, UserDetail};

#[derive(Clone)]
pub struct UserApi {
    crud: CrudEndpoint<UserDetail>,
}

impl UserApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self {
            crud: CrudEndpoint::new(http, api_path::USER),
        }
    }

    pub async fn all(&self) -> Result<Vec<UserDetail>> {
        self.crud.all().await
    }

    pub async fn list(&self, params: &SearchParams) -> Result<PaginatedResponse<UserDetail>> {
        self.crud.list(params).await
    }

    pub async fn details(&self, username: &str) -> Result<UserDetail> {
        self.crud
            .http_client()
            .get_json(&format!("{}/{}/details", api_path::USER, username), None)
            .await
    }

    pub async fn all_roles(&self) -> Result<Vec<Role>> {
        self.crud
            .http_client()
            .get_json(api_path::USER_ROLES, None)
            .await
    }

    pub async fn update<B: Serialize + Sync + ?Sized>(
        &self,
        username: &str,
        values: &B,
    ) -> Result<UserDetail> {
        self.crud.update(username, values).await
    }

    /// Replace the role set of one user
    pub async fn update_role(&self, values: &RoleUpdate) -> Result<Value> {
        self.crud
            .http_client()
            .put_json(api_path::USER_ROLE, values)
            .await
    }

    pub async fn delete(&self, username: &str) -> Result<()> {
        self.crud.delete(username).await
    }
}

#[async_trait]
impl ResourceApi for UserApi {
    type Item = UserDetail;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<UserDetail>> {
        UserApi::list(self, &request.params).await
    }

    async fn details(&self, key: &str) -> Result<UserDetail> {
        UserApi::details(self, key).await
    }

    async fn update(&self, key: &str, values: &Value) -> Result<UserDetail> {
        UserApi::update(self, key, values).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        UserApi::delete(self, key).await
    }

    fn route_key(&self, item: &UserDetail) -> String {
        item.username.clone()
    }
}
