// Dashboard chart model types

use serde::{Deserialize, Serialize};

/// A headline counter with its change against the previous period
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartTotal {
    pub total: f64,
    pub percent: Option<f64>,
}

/// A ranked lessee or lessor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopUser {
    pub username: String,
    pub full_name: String,
    pub image_url: Option<String>,
    pub total: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyRevenue {
    pub month: u32,
    pub revenue: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyViews {
    pub day: u32,
    pub views: u64,
}
