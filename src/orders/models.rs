//! Data models for orders

use chrono::{DateTime, Utc};
use sqlx::FromRow;

// ============================================================================
// Well-known status values
// ============================================================================
//
// Status fields are stored as open strings; these are the values the
// service itself writes. Callers may set other values via update.

pub mod order_status {
    pub const PENDING: &str = "Pending";
    pub const CONFIRMED: &str = "Confirmed";
    pub const CANCELLED: &str = "Cancelled";
    pub const COMPLETED: &str = "Completed";
}

pub mod payment_status {
    pub const PENDING: &str = "Pending";
    pub const PAID: &str = "Paid";
    pub const REFUNDED: &str = "Refunded";
    pub const FAILED: &str = "Failed";
}

/// A single order linking one car to one user
#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub order_id: i64,
    pub car_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
}

impl Order {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_check() {
        let order = Order {
            order_id: 1,
            car_id: 7,
            user_id: 3,
            created_at: Utc::now(),
            status: order_status::PENDING.to_string(),
            payment_status: payment_status::PENDING.to_string(),
            payment_method: None,
            transaction_id: None,
            payment_date: None,
        };

        assert!(order.is_owned_by(3));
        assert!(!order.is_owned_by(9));
    }
}
