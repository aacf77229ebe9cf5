//! Order lifecycle management
//!
//! An order links one car to one user and tracks its status and
//! payment lifecycle. Five operations are exposed over HTTP: create,
//! get, list, update, delete. Update and delete are restricted to the
//! order's owner; every mutation runs in its own database transaction.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;

pub use error::OrderError;
pub use models::Order;
pub use repository::OrderRepository;
pub use service::OrderService;
