//! Definición de rutas y ensamblado de la aplicación
//!
//! `create_app` monta el router público (auth, health) y el router
//! protegido detrás del middleware JWT. Las 27 tablas de definición se
//! montan en bucle desde la tabla de descriptores.

pub mod client_routes;
pub mod contract_routes;
pub mod disposal_routes;
pub mod insurance_routes;
pub mod lookup_routes;
pub mod maintenance_routes;
pub mod rental_routes;
pub mod report_routes;
pub mod supplier_routes;
pub mod user_routes;
pub mod vehicle_records_routes;
pub mod vehicle_routes;

use axum::{middleware, routing::get, Json, Router};
use serde_json::json;

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::cors_middleware;
use crate::models::lookup::LOOKUP_RESOURCES;
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/clients", client_routes::create_client_router())
        .nest("/api/suppliers", supplier_routes::create_supplier_router())
        .nest("/api/contracts", contract_routes::create_contract_router())
        .nest("/api/rentals", rental_routes::create_rental_router())
        .nest("/api/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/api/disposals", disposal_routes::create_disposal_router())
        .nest("/api/insurances", insurance_routes::create_insurance_router())
        .nest("/api/inspections", vehicle_records_routes::create_inspection_router())
        .nest("/api/tires", vehicle_records_routes::create_tire_router())
        .nest("/api/services", vehicle_records_routes::create_service_router())
        .nest("/api/reports", report_routes::create_report_router())
        .nest("/api/users", user_routes::create_user_router());

    // una entrada de router por tabla de definición
    let protected = LOOKUP_RESOURCES.iter().fold(protected, |router, resource| {
        router.nest(resource.path, lookup_routes::create_lookup_router(resource))
    });

    let protected = protected.layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/users", user_routes::create_public_user_router())
        .merge(protected)
        .layer(cors_middleware(&state.config.cors_origins))
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "fleet-backoffice"
    }))
}
