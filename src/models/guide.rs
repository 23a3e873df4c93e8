use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::bookings::{BookableItem, BookableKind};
use crate::models::catalog::Listable;
use crate::models::numeric::deserialize_lenient_f64;
use crate::models::timestamps::deserialize_optional_datetime;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TourGuide {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub languages: Vec<String>,
    /// culture, nature, culinary, ...
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub bio: String,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub price_per_day: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub rating: f64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
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

impl TourGuide {
    /// A guide is one person; there is no stock to book against.
    pub fn bookable(&self) -> Option<BookableItem> {
        let kind = BookableKind::TourGuide;
        Some(BookableItem {
            id: self.id?,
            kind,
            name: self.name.clone(),
            unit_rate: self.price_per_day,
            unit_label: kind.unit_label(),
            available_units: None,
        })
    }
}

impl Listable for TourGuide {
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
        &self.specialty
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn published_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.city, self.languages.join(" "))
    }
}
