//! Resource API modules
//!
//! Each resource is a table mapping logical operations to a URL template and
//! an HTTP verb. No branching happens here: calls return whatever the HTTP
//! client resolves with, and failures propagate unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::http::MotormateHttpClient;
use crate::model::{Blog, Brand, Category, Collection, Entity, PaginatedResponse, SearchParams};

pub mod account;
pub mod cart;
pub mod chart;
pub mod color;
pub mod crud;
pub mod model_vehicle;
pub mod order;
pub mod user;
pub mod vehicle;

pub use account::AccountApi;
pub use cart::{CartApi, CartSource};
pub use chart::ChartApi;
pub use color::ColorApi;
pub use crud::CrudEndpoint;
pub use model_vehicle::ModelVehicleApi;
pub use order::{OrderApi, ShopOrderSource, UserOrderSource};
pub use user::UserApi;
pub use vehicle::{UserVehicleSource, VehicleApi, VehicleStatusSource};

pub type BrandApi = CrudEndpoint<Brand>;
pub type CollectionApi = CrudEndpoint<Collection>;
pub type BlogApi = CrudEndpoint<Blog>;
pub type CategoryApi = CrudEndpoint<Category>;

/// Arguments of a list call.
///
/// `scope` carries the owning user id for per-user lists on the storefront;
/// admin lists ignore it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListRequest {
    pub scope: Option<String>,
    pub params: SearchParams,
}

impl ListRequest {
    pub fn new(params: SearchParams) -> Self {
        Self {
            scope: None,
            params,
        }
    }

    pub fn scoped(scope: impl Into<String>, params: SearchParams) -> Self {
        Self {
            scope: Some(scope.into()),
            params,
        }
    }

    pub(crate) fn require_scope(&self) -> Result<&str> {
        self.scope.as_deref().ok_or(ApiError::MissingScope)
    }
}

/// Uniform seam the state slices drive.
///
/// Only `list` is mandatory; resources without an operation report
/// [`ApiError::Unsupported`].
#[async_trait]
pub trait ResourceApi: Send + Sync {
    type Item: Entity;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<Self::Item>>;

    async fn details(&self, _key: &str) -> Result<Self::Item> {
        Err(ApiError::Unsupported("details"))
    }

    async fn create(&self, _values: &Value) -> Result<Self::Item> {
        Err(ApiError::Unsupported("create"))
    }

    async fn update(&self, _key: &str, _values: &Value) -> Result<Self::Item> {
        Err(ApiError::Unsupported("update"))
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(ApiError::Unsupported("delete"))
    }

    /// Key used in item URLs; defaults to the entity id
    fn route_key(&self, item: &Self::Item) -> String {
        item.id().to_string()
    }
}

/// Facade handing out every resource API over one shared HTTP client
#[derive(Clone)]
pub struct MotormateApi {
    http: Arc<MotormateHttpClient>,
}

impl MotormateApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self { http }
    }

    /// Get the underlying HTTP client
    pub fn http_client(&self) -> &Arc<MotormateHttpClient> {
        &self.http
    }

    pub fn account(&self) -> AccountApi {
        AccountApi::new(self.http.clone())
    }

    pub fn brand(&self) -> BrandApi {
        CrudEndpoint::new(self.http.clone(), crate::constants::api_path::BRAND)
    }

    pub fn collection(&self) -> CollectionApi {
        CrudEndpoint::new(self.http.clone(), crate::constants::api_path::COLLECTION)
    }

    pub fn model_vehicle(&self) -> ModelVehicleApi {
        ModelVehicleApi::new(self.http.clone())
    }

    pub fn color(&self) -> ColorApi {
        ColorApi::new(self.http.clone())
    }

    pub fn vehicle(&self) -> VehicleApi {
        VehicleApi::new(self.http.clone())
    }

    pub fn user(&self) -> UserApi {
        UserApi::new(self.http.clone())
    }

    pub fn blog(&self) -> BlogApi {
        CrudEndpoint::new(self.http.clone(), crate::constants::api_path::BLOG)
    }

    pub fn category(&self) -> CategoryApi {
        CrudEndpoint::new(self.http.clone(), crate::constants::api_path::BLOG_CATEGORY)
            .with_all_path(crate::constants::api_path::BLOG_CATEGORY)
    }

    pub fn order(&self) -> OrderApi {
        OrderApi::new(self.http.clone())
    }

    pub fn cart(&self) -> CartApi {
        CartApi::new(self.http.clone())
    }

    pub fn chart(&self) -> ChartApi {
        ChartApi::new(self.http.clone())
    }
}
