//! Car Orders - CRUD backend for car rental and purchase orders
//!
//! # Modules
//!
//! - [`orders`] - Order lifecycle: create, get, list, update, delete
//! - [`cars`] - Car catalog collaborator (existence checks)
//! - [`auth`] - Bearer-token verification and middleware
//! - [`gateway`] - HTTP server, routes, shared state, OpenAPI docs
//! - [`db`] - PostgreSQL connection pool
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup with rolling file output

pub mod auth;
pub mod cars;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use auth::{AuthService, Claims};
pub use cars::{Car, CarRepository};
pub use config::AppConfig;
pub use db::Database;
pub use orders::{Order, OrderError, OrderRepository, OrderService};
