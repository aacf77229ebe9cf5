use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::Database;

/// Shared application state for the HTTP gateway
pub struct AppState {
    /// PostgreSQL order storage
    pub db: Arc<Database>,
    /// Bearer-token verification
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthService>) -> Self {
        Self { db, auth }
    }
}
