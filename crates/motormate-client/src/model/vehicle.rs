// Vehicle model types

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::common::Entity;

/// Moderation state of a listed vehicle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Pending,
    Approved,
    Denied,
}

impl VehicleStatus {
    /// Path segment used by `api/vehicle/status/{route}`
    pub fn route(&self) -> &'static str {
        match self {
            VehicleStatus::Pending => "pending",
            VehicleStatus::Approved => "approved",
            VehicleStatus::Denied => "denied",
        }
    }

    /// Numeric code used by `api/vehicle/{id}/status/{code}`
    pub fn code(&self) -> u8 {
        match self {
            VehicleStatus::Pending => 0,
            VehicleStatus::Approved => 1,
            VehicleStatus::Denied => 2,
        }
    }

    /// Label as the server spells it in vehicle records
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Pending => "Pending",
            VehicleStatus::Approved => "Approved",
            VehicleStatus::Denied => "Denied",
        }
    }
}

impl Display for VehicleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specifications {
    pub model_name: String,
    pub color: String,
    pub brand_name: Option<String>,
    pub collection_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleImage {
    pub image: String,
    pub public_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default)]
    pub insurance_expiry: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_lock: bool,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default)]
    pub images: Vec<VehicleImage>,
    #[serde(default)]
    pub owner: Option<String>,
}

impl Vehicle {
    pub fn status(&self) -> Option<VehicleStatus> {
        match self.status.to_ascii_lowercase().as_str() {
            "pending" => Some(VehicleStatus::Pending),
            "approved" => Some(VehicleStatus::Approved),
            "denied" => Some(VehicleStatus::Denied),
            _ => None,
        }
    }
}

impl Entity for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }
}
