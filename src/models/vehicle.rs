use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::bookings::{BookableItem, BookableKind};
use crate::models::catalog::Listable;
use crate::models::numeric::{deserialize_lenient_f64, deserialize_optional_rounded_u32};
use crate::models::timestamps::deserialize_optional_datetime;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Vehicle {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    /// car, motorbike, minibus, ...
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub price_per_day: f64,
    #[serde(deserialize_with = "deserialize_optional_rounded_u32", default)]
    pub units_available: Option<u32>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
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

impl Vehicle {
    pub fn bookable(&self) -> Option<BookableItem> {
        let kind = BookableKind::Vehicle;
        Some(BookableItem {
            id: self.id?,
            kind,
            name: self.name.clone(),
            unit_rate: self.price_per_day,
            unit_label: kind.unit_label(),
            available_units: self.units_available,
        })
    }
}

impl Listable for Vehicle {
    fn sort_id(&self) -> Option<ObjectId> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price_per_day
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
        format!("{} {} {}", self.name, self.brand, self.city)
    }
}
