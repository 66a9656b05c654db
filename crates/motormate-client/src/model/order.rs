// Order, cart and review model types

use serde::{Deserialize, Serialize};

use super::common::Entity;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateRent {
    pub from: String,
    pub to: String,
}

/// A single rental transaction (admin "trip request" list)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub id: String,
    #[serde(default)]
    pub parent_order_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub date_rent: DateRent,
    #[serde(default)]
    pub created_at: String,
    // the server misspells this field
    #[serde(default, rename = "totalAmmount", alias = "totalAmount")]
    pub total_amount: f64,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderVehicle {
    pub vehicle_id: String,
    pub model_name: String,
    pub license_plate: String,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderShop {
    pub shop_id: String,
    pub shop_name: String,
    pub vehicles: Vec<OrderVehicle>,
}

/// An order grouping vehicles from one or more shops, keyed by its parent id
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentOrder {
    pub parent_order_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub shops: Vec<OrderShop>,
    #[serde(default)]
    pub date_rent: DateRent,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, rename = "totalAmmount", alias = "totalAmount")]
    pub total_amount: f64,
    #[serde(default)]
    pub status: String,
}

impl ParentOrder {
    /// Number of vehicles across every shop in the order
    pub fn vehicle_count(&self) -> usize {
        self.shops.iter().map(|shop| shop.vehicles.len()).sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub vehicle_id: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Body for `api/order/review`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleReview {
    pub order_id: String,
    pub vehicle_id: String,
    pub rating: u8,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Entity for TripRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for ParentOrder {
    fn id(&self) -> &str {
        &self.parent_order_id
    }
}

impl Entity for CartItem {
    fn id(&self) -> &str {
        &self.vehicle_id
    }
}
