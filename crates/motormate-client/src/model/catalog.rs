// Catalog model types: brands, collections, vehicle models, colors

use serde::{Deserialize, Serialize};

use super::common::{Entity, Image};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVehicle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub year_of_manufacture: Option<i32>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub seats: Option<u32>,
    #[serde(default)]
    pub colors: Vec<Color>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hex_code: Option<String>,
}

impl Entity for Brand {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Collection {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for ModelVehicle {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Color {
    fn id(&self) -> &str {
        &self.id
    }
}
