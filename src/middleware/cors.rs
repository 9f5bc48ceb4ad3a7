//! Middleware de CORS
//!
//! Este módulo construye la capa de CORS a partir de los orígenes
//! configurados en el entorno.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Crear middleware de CORS con orígenes específicos.
/// Sin orígenes configurados (desarrollo) se permite cualquiera.
pub fn cors_middleware(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    // la lista completa va en una sola llamada: allow_origin reemplaza
    // el valor anterior en cada invocación
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("cookie"),
        ])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
