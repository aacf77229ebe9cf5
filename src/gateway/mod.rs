pub mod health;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::AuthService;
use crate::auth::middleware::jwt_auth_middleware;
use crate::config::AppConfig;
use crate::db::Database;
use crate::orders::handlers;
use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(config: &AppConfig, db: Arc<Database>) {
    let auth = Arc::new(AuthService::new(config.jwt_secret.clone()));
    let state = Arc::new(AppState::new(db, auth));

    // ==========================================================================
    // Order Routes - Protected by JWT
    // ==========================================================================
    let order_routes = Router::new()
        .route("/create", post(handlers::create_order))
        .route("/", get(handlers::list_orders))
        .route("/my", get(handlers::list_my_orders))
        .route("/{order_id}", get(handlers::get_order))
        .route("/update/{order_id}", put(handlers::update_order))
        .route("/delete/{order_id}", delete(handlers::delete_order))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    // Build complete router
    let app = Router::new()
        .route("/api/v1/health", get(health::health_check))
        .nest("/api/v1/orders", order_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    // Bind address
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                config.gateway.port, config.gateway.port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    println!("🔒 Order API: /api/v1/orders/* (auth required)");

    // Start server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
