#![allow(dead_code)]

use actix_web::{middleware::Logger, web, App};
use chrono::Duration;
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;

use tourism_market_api::{
    config::AppConfig,
    db::memory::MemoryStore,
    middleware::auth::generate_token,
    models::{
        accommodation::Accommodation, account::Role, destination::Destination,
        guide::TourGuide, vehicle::Vehicle,
    },
    routes,
    services::pricing_service::PricingOptions,
    state::AppState,
};

pub const JWT_SECRET: &str = "test_secret";

pub const VILLA_ID: &str = "65a000000000000000000001";
pub const HOMESTAY_ID: &str = "65a000000000000000000002";
pub const HOTEL_ID: &str = "65a000000000000000000003";
pub const BUNGALOW_ID: &str = "65a000000000000000000004";
pub const SCOOTER_ID: &str = "65b000000000000000000001";
pub const CAR_ID: &str = "65b000000000000000000002";
pub const JEEP_ID: &str = "65b000000000000000000003";
pub const GUIDE_ID: &str = "65c000000000000000000001";

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_pricing(PricingOptions::default())
    }

    pub fn with_pricing(pricing: PricingOptions) -> Self {
        let config = AppConfig {
            jwt_secret: JWT_SECRET.to_string(),
            pricing,
            ..Default::default()
        };
        let state = AppState::new(Arc::new(seeded_store()), &config);
        Self {
            state: web::Data::new(state),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(Logger::default())
            .configure(|cfg| routes::config(cfg, JWT_SECRET))
    }
}

fn parse<T: DeserializeOwned>(doc: Value) -> T {
    serde_json::from_value(doc).expect("valid seed document")
}

fn accommodation(id: &str, doc: Value) -> Accommodation {
    Accommodation {
        id: Some(oid(id)),
        ..parse(doc)
    }
}

fn vehicle(id: &str, doc: Value) -> Vehicle {
    Vehicle {
        id: Some(oid(id)),
        ..parse(doc)
    }
}

fn tour_guide(id: &str, doc: Value) -> TourGuide {
    TourGuide {
        id: Some(oid(id)),
        ..parse(doc)
    }
}

fn destination(id: &str, doc: Value) -> Destination {
    Destination {
        id: Some(oid(id)),
        ..parse(doc)
    }
}

pub fn seeded_store() -> MemoryStore {
    let accommodations = vec![
        accommodation(
            VILLA_ID,
            json!({
                "name": "Ubud Jungle Villa",
                "city": "Ubud",
                "category": "villa",
                "price_per_night": 300000,
                "rooms_available": 2,
                "rating": 4.8,
                "created_at": "2024-01-05T00:00:00Z"
            }),
        ),
        accommodation(
            HOMESTAY_ID,
            json!({
                "name": "Kuta Homestay",
                "city": "Kuta",
                "category": "homestay",
                "price_per_night": "150000",
                "rating": 4.1,
                "created_at": "2024-01-02T00:00:00Z"
            }),
        ),
        accommodation(
            HOTEL_ID,
            json!({
                "name": "Seminyak Beach Hotel",
                "city": "Seminyak",
                "category": "hotel",
                "price_per_night": 600000,
                "rooms_available": 10,
                "rating": 4.5,
                "created_at": "2024-01-03T00:00:00Z"
            }),
        ),
        accommodation(
            BUNGALOW_ID,
            json!({
                "name": "Amed Bungalow",
                "city": "Amed",
                "category": "homestay",
                "price_per_night": 250000,
                "rating": 3.9,
                "created_at": "2024-01-04T00:00:00Z"
            }),
        ),
    ];

    let vehicles = vec![
        vehicle(
            SCOOTER_ID,
            json!({
                "name": "Honda Vario 125",
                "brand": "Honda",
                "category": "motorbike",
                "city": "Denpasar",
                "price_per_day": 75000,
                "units_available": 5,
                "rating": 4.6
            }),
        ),
        vehicle(
            CAR_ID,
            json!({
                "name": "Toyota Avanza",
                "brand": "Toyota",
                "category": "car",
                "city": "Denpasar",
                "price_per_day": 350000,
                "units_available": 2,
                "rating": 4.3,
                "created_at": "2024-01-06T00:00:00Z"
            }),
        ),
        vehicle(
            JEEP_ID,
            json!({
                "name": "Suzuki Jimny",
                "brand": "Suzuki",
                "category": "car",
                "city": "Kintamani",
                "price_per_day": 500000,
                "units_available": 1,
                "rating": 4.7,
                "created_at": "2024-01-01T00:00:00Z"
            }),
        ),
    ];

    let tour_guides = vec![tour_guide(
        GUIDE_ID,
        json!({
            "name": "Made Suardana",
            "city": "Ubud",
            "languages": ["Indonesian", "English", "Japanese"],
            "specialty": "culture",
            "price_per_day": 450000,
            "rating": 4.9
        }),
    )];

    let destinations = vec![
        destination(
            "65d000000000000000000001",
            json!({
                "name": "Tanah Lot",
                "city": "Tabanan",
                "province": "Bali",
                "category": "culture",
                "entry_fee": 60000,
                "rating": 4.7
            }),
        ),
        destination(
            "65d000000000000000000002",
            json!({
                "name": "Mount Batur",
                "city": "Kintamani",
                "province": "Bali",
                "category": "mountain",
                "entry_fee": 0,
                "rating": 4.8
            }),
        ),
    ];

    MemoryStore::new()
        .with_accommodations(accommodations)
        .with_vehicles(vehicles)
        .with_tour_guides(tour_guides)
        .with_destinations(destinations)
}

pub fn oid(hex: &str) -> ObjectId {
    ObjectId::parse_str(hex).expect("valid object id")
}

pub fn bearer_for(user_id: &str) -> String {
    let token = generate_token(
        JWT_SECRET,
        &format!("{}@example.com", user_id),
        user_id,
        Role::Customer,
        Duration::hours(1),
    )
    .expect("token");
    format!("Bearer {}", token)
}

pub fn item_names(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
