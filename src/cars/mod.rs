//! Car catalog collaborator
//!
//! Orders only need existence checks against the car catalog; the
//! catalog itself is maintained elsewhere.

pub mod models;
pub mod repository;

pub use models::Car;
pub use repository::CarRepository;
