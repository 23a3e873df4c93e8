use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::db::{CatalogStore, StoreError};
use crate::models::{
    accommodation::Accommodation,
    bookings::{BookableKind, BookingRecord},
    destination::Destination,
    guide::TourGuide,
    timestamps::to_bson_datetime,
    vehicle::Vehicle,
};

const CATALOG_DB: &str = "Catalog";
const ACCOUNT_DB: &str = "Account";

// Booking dates are stored as BSON dates so `created_at` sorts server-side.
fn booking_document(booking: &BookingRecord) -> Result<Document, StoreError> {
    let mut document = bson::to_document(booking)?;
    document.insert("start", to_bson_datetime(booking.start));
    document.insert("end", to_bson_datetime(booking.end));
    if let Some(created_at) = booking.created_at {
        document.insert("created_at", to_bson_datetime(created_at));
    }
    Ok(document)
}

pub async fn create_mongo_client(uri: &str) -> Result<Arc<Client>, StoreError> {
    log::info!("Connecting to MongoDB");

    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    // Stable API, MongoDB 5.0+
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    match client.database(ACCOUNT_DB).run_command(doc! {"ping": 1}).await {
        Ok(_) => log::info!("Connected to MongoDB and verified with ping"),
        Err(e) => {
            log::warn!("Connected to MongoDB but ping failed: {}", e);
            log::warn!("The API may still work, but some functionality might be impaired");
        }
    }

    Ok(Arc::new(client))
}

pub struct MongoStore {
    client: Arc<Client>,
}

impl MongoStore {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn catalog<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(CATALOG_DB).collection(name)
    }

    fn bookings(&self) -> Collection<BookingRecord> {
        self.client.database(ACCOUNT_DB).collection("Bookings")
    }

    async fn find_all<T>(&self, name: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let cursor = self.catalog::<T>(name).find(doc! {}).await?;
        let items = cursor.try_collect::<Vec<T>>().await?;
        log::debug!("Fetched {} documents from {}", items.len(), name);
        Ok(items)
    }

    async fn find_by_id<T>(&self, name: &str, id: ObjectId) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        Ok(self.catalog::<T>(name).find_one(doc! { "_id": id }).await?)
    }
}

#[async_trait]
impl CatalogStore for MongoStore {
    async fn destinations(&self) -> Result<Vec<Destination>, StoreError> {
        self.find_all("Destination").await
    }

    async fn accommodations(&self) -> Result<Vec<Accommodation>, StoreError> {
        self.find_all(BookableKind::Accommodation.collection_name()).await
    }

    async fn vehicles(&self) -> Result<Vec<Vehicle>, StoreError> {
        self.find_all(BookableKind::Vehicle.collection_name()).await
    }

    async fn tour_guides(&self) -> Result<Vec<TourGuide>, StoreError> {
        self.find_all(BookableKind::TourGuide.collection_name()).await
    }

    async fn destination(&self, id: ObjectId) -> Result<Option<Destination>, StoreError> {
        self.find_by_id("Destination", id).await
    }

    async fn accommodation(&self, id: ObjectId) -> Result<Option<Accommodation>, StoreError> {
        self.find_by_id(BookableKind::Accommodation.collection_name(), id)
            .await
    }

    async fn vehicle(&self, id: ObjectId) -> Result<Option<Vehicle>, StoreError> {
        self.find_by_id(BookableKind::Vehicle.collection_name(), id)
            .await
    }

    async fn tour_guide(&self, id: ObjectId) -> Result<Option<TourGuide>, StoreError> {
        self.find_by_id(BookableKind::TourGuide.collection_name(), id)
            .await
    }

    async fn insert_booking(&self, mut booking: BookingRecord) -> Result<BookingRecord, StoreError> {
        let result = self
            .bookings()
            .clone_with_type::<Document>()
            .insert_one(booking_document(&booking)?)
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingInsertedId)?;
        booking.id = Some(id);
        Ok(booking)
    }

    async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<BookingRecord>, StoreError> {
        let cursor = self
            .bookings()
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
