//! Order operation errors
//!
//! Handlers return these directly; the `IntoResponse` impl translates
//! them to transport status codes at the boundary, keeping status-code
//! logic out of the service layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::gateway::types::ErrorBody;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Car ID is required")]
    MissingCarId,

    #[error("Invalid payment date: expected ISO-8601 date-time")]
    InvalidPaymentDate,

    #[error("Car not found")]
    CarNotFound,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Unauthorized access")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl OrderError {
    /// Get HTTP status code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::MissingCarId | Self::InvalidPaymentDate => StatusCode::BAD_REQUEST,
            Self::CarNotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        // Storage failures surface as a generic message; the detail
        // goes to the log, not the client.
        let message = match &self {
            Self::Database(e) => {
                tracing::error!("Order operation failed: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (self.http_status(), Json(ErrorBody::new(message))).into_response()
    }
}
