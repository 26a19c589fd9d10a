//! Access to the remote trip planning service.

pub mod client;

use crate::errors::AppResult;
use crate::models::trip::{TripInput, TripResult};
use async_trait::async_trait;

pub use client::HttpTripApi;

#[async_trait]
pub trait TripApi: Send + Sync {
    /// Plan a new trip.
    async fn create_trip(&self, input: &TripInput) -> AppResult<TripResult>;

    /// All stored trips, newest first.
    async fn list_trips(&self) -> AppResult<Vec<TripResult>>;

    async fn get_trip(&self, id: u64) -> AppResult<TripResult>;
}
