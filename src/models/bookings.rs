use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::timestamps::{deserialize_datetime, deserialize_optional_datetime};

/// Which catalog a bookable item comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookableKind {
    Accommodation,
    Vehicle,
    TourGuide,
}

impl BookableKind {
    /// Accommodations are priced per night, rentals and guides per day.
    pub fn unit_label(&self) -> UnitLabel {
        match self {
            BookableKind::Accommodation => UnitLabel::Night,
            BookableKind::Vehicle | BookableKind::TourGuide => UnitLabel::Day,
        }
    }

    pub fn collection_name(&self) -> &'static str {
        match self {
            BookableKind::Accommodation => "Accommodation",
            BookableKind::Vehicle => "Vehicle",
            BookableKind::TourGuide => "TourGuide",
        }
    }
}

impl fmt::Display for BookableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookableKind::Accommodation => "accommodation",
            BookableKind::Vehicle => "vehicle",
            BookableKind::TourGuide => "tour_guide",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitLabel {
    Night,
    Day,
}

/// Read-only pricing view of a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookableItem {
    pub id: ObjectId,
    pub kind: BookableKind,
    pub name: String,
    pub unit_rate: f64,
    pub unit_label: UnitLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_units: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Builds a range only when both ends are set.
    pub fn from_parts(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Option<Self> {
        Some(Self::new(start?, end?))
    }
}

/*
    POST /api/quotes
*/
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteInput {
    pub kind: BookableKind,
    pub item_id: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub quantity: Option<u32>,
}

/*
    POST /api/bookings
*/
#[derive(Debug, Clone, Deserialize)]
pub struct BookingInput {
    pub kind: BookableKind,
    pub item_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub quantity: Option<u32>,
    /// Total shown to the customer; checked against the server-side quote.
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub reference: String,
    pub user_id: String,
    pub item_id: ObjectId,
    pub kind: BookableKind,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub end: DateTime<Utc>,
    pub quantity: u32,
    pub unit_rate: f64,
    pub total: f64,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}
