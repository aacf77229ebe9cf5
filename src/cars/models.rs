//! Data models for the car catalog

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A car available for rental or purchase
#[derive(Debug, Clone, FromRow)]
pub struct Car {
    pub car_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
