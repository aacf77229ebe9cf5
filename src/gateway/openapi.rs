//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::gateway::health::HealthResponse;
use crate::gateway::types::ErrorBody;
use crate::orders::types::{
    CreateOrderRequest, CreateOrderResponse, MessageResponse, OrderData, OrderEnvelope,
    OrdersEnvelope, UpdateOrderRequest,
};

/// JWT bearer authentication security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car Orders API",
        version = "1.0.0",
        description = "CRUD backend for car rental and purchase orders.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::health::health_check,
        crate::orders::handlers::create_order,
        crate::orders::handlers::get_order,
        crate::orders::handlers::list_orders,
        crate::orders::handlers::list_my_orders,
        crate::orders::handlers::update_order,
        crate::orders::handlers::delete_order,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderData,
            OrderEnvelope,
            OrdersEnvelope,
            CreateOrderResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Orders", description = "Order lifecycle management (auth required)"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Car Orders API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Car Orders API"));
    }

    #[test]
    fn test_order_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/orders/create"));
        assert!(paths.paths.contains_key("/api/v1/orders/{order_id}"));
        assert!(paths.paths.contains_key("/api/v1/orders/update/{order_id}"));
        assert!(paths.paths.contains_key("/api/v1/orders/delete/{order_id}"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_jwt"));
    }
}
