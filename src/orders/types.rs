//! Request and response types for the order API
//!
//! Request bodies are camelCase; the serialized order is snake_case
//! with timestamps rendered as RFC 3339 text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::OrderError;
use super::models::Order;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Car to order. Required; absence is a validation error, not a
    /// deserialization failure.
    #[schema(example = 7)]
    pub car_id: Option<i64>,
}

/// Partial update: each field present in the request overwrites the
/// stored field, absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[schema(example = "Confirmed")]
    pub status: Option<String>,
    #[schema(example = "Paid")]
    pub payment_status: Option<String>,
    #[schema(example = "card")]
    pub payment_method: Option<String>,
    #[schema(example = "tx123")]
    pub transaction_id: Option<String>,
    /// RFC 3339 date-time text
    #[schema(example = "2026-08-01T12:00:00Z")]
    pub payment_date: Option<String>,
}

/// The post-merge field values of an order
#[derive(Debug, Clone, PartialEq)]
pub struct MergedOrderFields {
    pub status: String,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
}

impl UpdateOrderRequest {
    /// Merge this request onto the stored order.
    ///
    /// A malformed `payment_date` fails the whole update before any
    /// write happens.
    pub fn merge_into(&self, order: &Order) -> Result<MergedOrderFields, OrderError> {
        let payment_date = match &self.payment_date {
            Some(text) => Some(parse_payment_date(text)?),
            None => order.payment_date,
        };

        Ok(MergedOrderFields {
            status: self.status.clone().unwrap_or_else(|| order.status.clone()),
            payment_status: self
                .payment_status
                .clone()
                .unwrap_or_else(|| order.payment_status.clone()),
            payment_method: self.payment_method.clone().or_else(|| order.payment_method.clone()),
            transaction_id: self.transaction_id.clone().or_else(|| order.transaction_id.clone()),
            payment_date,
        })
    }
}

fn parse_payment_date(text: &str) -> Result<DateTime<Utc>, OrderError> {
    DateTime::parse_from_rfc3339(text)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| OrderError::InvalidPaymentDate)
}

// ============================================================================
// Responses
// ============================================================================

/// Serialized order: `{id, car_id, user_id, created_at, status,
/// payment_status, payment_method, transaction_id, payment_date}`
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderData {
    pub id: i64,
    pub car_id: i64,
    pub user_id: i64,
    /// Creation time, RFC 3339
    pub created_at: String,
    pub status: String,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    /// Payment time, RFC 3339, null until a payment is recorded
    pub payment_date: Option<String>,
}

impl From<Order> for OrderData {
    fn from(order: Order) -> Self {
        Self {
            id: order.order_id,
            car_id: order.car_id,
            user_id: order.user_id,
            created_at: order.created_at.to_rfc3339(),
            status: order.status,
            payment_status: order.payment_status,
            payment_method: order.payment_method,
            transaction_id: order.transaction_id,
            payment_date: order.payment_date.map(|d| d.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    #[schema(example = "Order created successfully")]
    pub message: String,
    #[serde(rename = "orderId")]
    #[schema(example = 42)]
    pub order_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderEnvelope {
    pub order: OrderData,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrdersEnvelope {
    pub orders: Vec<OrderData>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Order updated successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::models::{order_status, payment_status};
    use chrono::TimeZone;

    fn sample_order() -> Order {
        Order {
            order_id: 42,
            car_id: 7,
            user_id: 3,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
            status: order_status::PENDING.to_string(),
            payment_status: payment_status::PENDING.to_string(),
            payment_method: None,
            transaction_id: None,
            payment_date: None,
        }
    }

    // =========================================================================
    // Request deserialization
    // =========================================================================

    #[test]
    fn test_create_request_missing_car_id() {
        let req: CreateOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(req.car_id.is_none());
    }

    #[test]
    fn test_create_request_camel_case() {
        let req: CreateOrderRequest = serde_json::from_str(r#"{"carId": 7}"#).unwrap();
        assert_eq!(req.car_id, Some(7));
    }

    #[test]
    fn test_update_request_partial_fields() {
        let json = r#"{"paymentStatus": "Paid", "transactionId": "tx123"}"#;
        let req: UpdateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.payment_status.as_deref(), Some("Paid"));
        assert_eq!(req.transaction_id.as_deref(), Some("tx123"));
        assert!(req.status.is_none());
        assert!(req.payment_method.is_none());
        assert!(req.payment_date.is_none());
    }

    // =========================================================================
    // Merge-on-present semantics
    // =========================================================================

    #[test]
    fn test_merge_status_only_leaves_payment_fields() {
        let order = sample_order();
        let req = UpdateOrderRequest {
            status: Some("Confirmed".to_string()),
            ..Default::default()
        };

        let merged = req.merge_into(&order).unwrap();
        assert_eq!(merged.status, "Confirmed");
        assert_eq!(merged.payment_status, order_status::PENDING);
        assert!(merged.payment_method.is_none());
        assert!(merged.transaction_id.is_none());
        assert!(merged.payment_date.is_none());
    }

    #[test]
    fn test_merge_keeps_existing_values_when_absent() {
        let mut order = sample_order();
        order.payment_method = Some("card".to_string());
        order.transaction_id = Some("tx-old".to_string());
        order.payment_date = Some(Utc.with_ymd_and_hms(2026, 8, 2, 9, 0, 0).unwrap());

        let req = UpdateOrderRequest {
            payment_status: Some("Paid".to_string()),
            ..Default::default()
        };

        let merged = req.merge_into(&order).unwrap();
        assert_eq!(merged.payment_status, "Paid");
        assert_eq!(merged.payment_method.as_deref(), Some("card"));
        assert_eq!(merged.transaction_id.as_deref(), Some("tx-old"));
        assert_eq!(merged.payment_date, order.payment_date);
    }

    #[test]
    fn test_merge_parses_payment_date() {
        let order = sample_order();
        let req = UpdateOrderRequest {
            payment_date: Some("2026-08-03T10:30:00Z".to_string()),
            ..Default::default()
        };

        let merged = req.merge_into(&order).unwrap();
        assert_eq!(
            merged.payment_date,
            Some(Utc.with_ymd_and_hms(2026, 8, 3, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_merge_rejects_malformed_payment_date() {
        let order = sample_order();
        let req = UpdateOrderRequest {
            payment_date: Some("yesterday".to_string()),
            ..Default::default()
        };

        let result = req.merge_into(&order);
        assert!(matches!(result, Err(OrderError::InvalidPaymentDate)));
    }

    // =========================================================================
    // Response serialization
    // =========================================================================

    #[test]
    fn test_order_data_serializes_null_payment_date() {
        let data = OrderData::from(sample_order());
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["car_id"], 7);
        assert_eq!(json["user_id"], 3);
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["payment_status"], "Pending");
        assert!(json["payment_date"].is_null());
        assert!(json["payment_method"].is_null());
        assert!(json["created_at"].as_str().unwrap().starts_with("2026-08-01T12:00:00"));
    }

    #[test]
    fn test_create_response_uses_order_id_key() {
        let resp = CreateOrderResponse {
            message: "Order created successfully".to_string(),
            order_id: 42,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["orderId"], 42);
        assert_eq!(json["message"], "Order created successfully");
    }
}
