//! Bearer-token authentication boundary
//!
//! Token issuance lives outside this service; we only verify HS256
//! bearer tokens and resolve them into a caller user id.

pub mod middleware;
pub mod service;

pub use service::{AuthService, Claims};
