use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::{
    accommodation::Accommodation,
    bookings::{BookableItem, BookableKind, BookingRecord},
    destination::Destination,
    guide::TourGuide,
    vehicle::Vehicle,
};

pub mod memory;
pub mod mongo;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("could not encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
    #[error("inserted booking has no object id")]
    MissingInsertedId,
}

/// Read access to the catalogs plus the booking ledger.
///
/// Catalog reads always return the whole collection; filtering, sorting
/// and paging happen in [`crate::services::catalog_service`].
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn destinations(&self) -> Result<Vec<Destination>, StoreError>;
    async fn accommodations(&self) -> Result<Vec<Accommodation>, StoreError>;
    async fn vehicles(&self) -> Result<Vec<Vehicle>, StoreError>;
    async fn tour_guides(&self) -> Result<Vec<TourGuide>, StoreError>;

    async fn destination(&self, id: ObjectId) -> Result<Option<Destination>, StoreError>;
    async fn accommodation(&self, id: ObjectId) -> Result<Option<Accommodation>, StoreError>;
    async fn vehicle(&self, id: ObjectId) -> Result<Option<Vehicle>, StoreError>;
    async fn tour_guide(&self, id: ObjectId) -> Result<Option<TourGuide>, StoreError>;

    /// Stores the booking and returns it with its assigned id.
    async fn insert_booking(&self, booking: BookingRecord) -> Result<BookingRecord, StoreError>;

    /// Bookings of one user, newest first.
    async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<BookingRecord>, StoreError>;

    /// Name of the backing store, for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    async fn find_bookable(
        &self,
        kind: BookableKind,
        id: ObjectId,
    ) -> Result<Option<BookableItem>, StoreError> {
        let item = match kind {
            BookableKind::Accommodation => self.accommodation(id).await?.and_then(|a| a.bookable()),
            BookableKind::Vehicle => self.vehicle(id).await?.and_then(|v| v.bookable()),
            BookableKind::TourGuide => self.tour_guide(id).await?.and_then(|g| g.bookable()),
        };
        Ok(item)
    }
}
