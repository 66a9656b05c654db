//! Vehicle endpoints and the list sources built on them

use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{CrudEndpoint, ListRequest, ResourceApi};
use crate::constants::api_path;
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{PaginatedResponse, SearchParams, Vehicle, VehicleStatus};

#[derive(Clone)]
pub struct VehicleApi {
    crud: CrudEndpoint<Vehicle>,
}

impl VehicleApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self {
            crud: CrudEndpoint::new(http, api_path::VEHICLE),
        }
    }

    /// Vehicles in one approval state (`api/vehicle/status/{pending|approved|denied}`)
    pub async fn list_by_status(
        &self,
        params: &SearchParams,
        status: VehicleStatus,
    ) -> Result<PaginatedResponse<Vehicle>> {
        self.crud
            .http_client()
            .get_page(
                &format!("{}/{}", api_path::VEHICLE_BY_STATUS, status.route()),
                Some(params),
            )
            .await
    }

    /// Toggle the lock flag of a vehicle
    pub async fn lock(&self, vehicle_id: &str) -> Result<Value> {
        self.crud
            .http_client()
            .post_json(&format!("{}/{}/lock", api_path::VEHICLE, vehicle_id), &json!({}))
            .await
    }

    pub async fn update_status(&self, vehicle_id: &str, status: VehicleStatus) -> Result<Value> {
        self.crud
            .http_client()
            .post_json(
                &format!(
                    "{}/{}/status/{}",
                    api_path::VEHICLE,
                    vehicle_id,
                    status.code()
                ),
                &json!({}),
            )
            .await
    }

    /// Vehicles listed by one owner (storefront "my products")
    pub async fn products_of_user(
        &self,
        user_id: &str,
        params: &SearchParams,
    ) -> Result<PaginatedResponse<Vehicle>> {
        self.crud
            .http_client()
            .get_page(
                &format!("{}/{}", api_path::VEHICLE_OF_USER, user_id),
                Some(params),
            )
            .await
    }
}

impl Deref for VehicleApi {
    type Target = CrudEndpoint<Vehicle>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}

#[async_trait]
impl ResourceApi for VehicleApi {
    type Item = Vehicle;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<Vehicle>> {
        self.crud.list(&request.params).await
    }

    async fn details(&self, key: &str) -> Result<Vehicle> {
        self.crud.details(key).await
    }

    async fn create(&self, values: &Value) -> Result<Vehicle> {
        self.crud.create(values).await
    }

    async fn update(&self, key: &str, values: &Value) -> Result<Vehicle> {
        self.crud.update(key, values).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.crud.delete(key).await
    }
}

/// Vehicles filtered to one approval state
#[derive(Clone)]
pub struct VehicleStatusSource {
    api: VehicleApi,
    status: VehicleStatus,
}

impl VehicleStatusSource {
    pub fn new(api: VehicleApi, status: VehicleStatus) -> Self {
        Self { api, status }
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn api(&self) -> &VehicleApi {
        &self.api
    }
}

#[async_trait]
impl ResourceApi for VehicleStatusSource {
    type Item = Vehicle;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<Vehicle>> {
        self.api.list_by_status(&request.params, self.status).await
    }

    async fn details(&self, key: &str) -> Result<Vehicle> {
        self.api.crud.details(key).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.api.crud.delete(key).await
    }
}

/// Vehicles owned by the user named in the request scope
#[derive(Clone)]
pub struct UserVehicleSource {
    api: VehicleApi,
}

impl UserVehicleSource {
    pub fn new(api: VehicleApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceApi for UserVehicleSource {
    type Item = Vehicle;

    async fn list(&self, request: &ListRequest) -> Result<PaginatedResponse<Vehicle>> {
        let user_id = request.require_scope()?;
        self.api.products_of_user(user_id, &request.params).await
    }

    async fn details(&self, key: &str) -> Result<Vehicle> {
        self.api.crud.details(key).await
    }

    async fn create(&self, values: &Value) -> Result<Vehicle> {
        self.api.crud.create(values).await
    }

    async fn update(&self, key: &str, values: &Value) -> Result<Vehicle> {
        self.api.crud.update(key, values).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.api.crud.delete(key).await
    }
}
