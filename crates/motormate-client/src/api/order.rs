//! Order endpoints: the admin trip-request list and the storefront order views

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{ListRequest, ResourceApi};
use crate::constants::api_path;
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{PaginatedResponse, ParentOrder, SearchParams, TripRequest, VehicleReview};

#[derive(Clone)]
pub struct OrderApi {
    http: Arc<MotormateHttpClient>,
}

impl OrderApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self, params: &SearchParams) -> Result<PaginatedResponse<TripRequest>> {
        self.http.get_page(api_path::ORDER, Some(params)).await
    }

    pub async fn parent_order(&self, parent_order_id: &str) -> Result<ParentOrder> {
        self.http
            .get_json(
                &format!("{}/{}", api_path::ORDER_PARENT, parent_order_id),
                None,
            )
            .await
    }

    /// Orders placed by a user
    pub async fn user_orders(
        &self,
        user_id: &str,
        params: &SearchParams,
    ) -> Result<PaginatedResponse<ParentOrder>> {
        self.http
            .get_page(
                &format!("{}/{}", api_path::ORDER_OF_USER, user_id),
                Some(params),
            )
            .await
    }

    /// Orders received by the shop a user runs
    pub async fn shop_orders(
        &self,
        user_id: &str,
        params: &SearchParams,
    ) -> Result<PaginatedResponse<ParentOrder>> {
        self.http
            .get_page(
                &format!("{}/{}", api_path::ORDER_OF_SHOP, user_id),
                Some(params),
            )
            .await
    }

    pub async fn review_vehicle(&self, review: &VehicleReview) -> Result<Value> {
        self.http.post_json(api_path::ORDER_REVIEW, review).await
    }
}

#[async_trait]
impl ResourceApi for OrderApi {
    type Item = TripRequest;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<TripRequest>> {
        OrderApi::list(self, &request.params).await
    }
}

/// Orders placed by the user named in the request scope
#[derive(Clone)]
pub struct UserOrderSource {
    api: OrderApi,
}

impl UserOrderSource {
    pub fn new(api: OrderApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceApi for UserOrderSource {
    type Item = ParentOrder;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<ParentOrder>> {
        let user_id = request.require_scope()?;
        self.api.user_orders(user_id, &request.params).await
    }

    async fn details(&self, key: &str) -> Result<ParentOrder> {
        self.api.parent_order(key).await
    }
}

/// Orders received by the shop of the user named in the request scope
#[derive(Clone)]
pub struct ShopOrderSource {
    api: OrderApi,
}

impl ShopOrderSource {
    pub fn new(api: OrderApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceApi for ShopOrderSource {
    type Item = ParentOrder;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<ParentOrder>> {
        let user_id = request.require_scope()?;
        self.api.shop_orders(user_id, &request.params).await
    }

    async fn details(&self, key: &str) -> Result<ParentOrder> {
        self.api.parent_order(key).await
    }
}
