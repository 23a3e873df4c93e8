use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::db::{CatalogStore, StoreError};
use crate::models::{
    accommodation::Accommodation, bookings::BookingRecord, destination::Destination,
    guide::TourGuide, vehicle::Vehicle,
};

#[derive(Default)]
struct MemoryData {
    destinations: Vec<Destination>,
    accommodations: Vec<Accommodation>,
    vehicles: Vec<Vehicle>,
    tour_guides: Vec<TourGuide>,
    bookings: Vec<BookingRecord>,
}

/// Process-local store, used when no MongoDB URI is configured.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<MemoryData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destinations(mut self, items: Vec<Destination>) -> Self {
        self.data.get_mut().destinations = items;
        self
    }

    pub fn with_accommodations(mut self, items: Vec<Accommodation>) -> Self {
        self.data.get_mut().accommodations = items;
        self
    }

    pub fn with_vehicles(mut self, items: Vec<Vehicle>) -> Self {
        self.data.get_mut().vehicles = items;
        self
    }

    pub fn with_tour_guides(mut self, items: Vec<TourGuide>) -> Self {
        self.data.get_mut().tour_guides = items;
        self
    }
}

fn by_id<T: Clone>(items: &[T], id: ObjectId, get: impl Fn(&T) -> Option<ObjectId>) -> Option<T> {
    items.iter().find(|item| get(item) == Some(id)).cloned()
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn destinations(&self) -> Result<Vec<Destination>, StoreError> {
        Ok(self.data.read().await.destinations.clone())
    }

    async fn accommodations(&self) -> Result<Vec<Accommodation>, StoreError> {
        Ok(self.data.read().await.accommodations.clone())
    }

    async fn vehicles(&self) -> Result<Vec<Vehicle>, StoreError> {
        Ok(self.data.read().await.vehicles.clone())
    }

    async fn tour_guides(&self) -> Result<Vec<TourGuide>, StoreError> {
        Ok(self.data.read().await.tour_guides.clone())
    }

    async fn destination(&self, id: ObjectId) -> Result<Option<Destination>, StoreError> {
        Ok(by_id(&self.data.read().await.destinations, id, |d| d.id))
    }

    async fn accommodation(&self, id: ObjectId) -> Result<Option<Accommodation>, StoreError> {
        Ok(by_id(&self.data.read().await.accommodations, id, |a| a.id))
    }

    async fn vehicle(&self, id: ObjectId) -> Result<Option<Vehicle>, StoreError> {
        Ok(by_id(&self.data.read().await.vehicles, id, |v| v.id))
    }

    async fn tour_guide(&self, id: ObjectId) -> Result<Option<TourGuide>, StoreError> {
        Ok(by_id(&self.data.read().await.tour_guides, id, |g| g.id))
    }

    async fn insert_booking(&self, mut booking: BookingRecord) -> Result<BookingRecord, StoreError> {
        booking.id = Some(ObjectId::new());
        self.data.write().await.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn bookings_for_user(&self, user_id: &str) -> Result<Vec<BookingRecord>, StoreError> {
        let mut bookings: Vec<BookingRecord> = self
            .data
            .read()
            .await
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
