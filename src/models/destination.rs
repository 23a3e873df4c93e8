use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::catalog::Listable;
use crate::models::numeric::deserialize_lenient_f64;
use crate::models::timestamps::deserialize_optional_datetime;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Destination {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    /// beach, mountain, culture, ...
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub entry_fee: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Listable for Destination {
    fn sort_id(&self) -> Option<ObjectId> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.entry_fee
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn published_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.city, self.province)
    }
}
