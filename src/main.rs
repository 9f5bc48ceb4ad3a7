use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_backoffice::config::database::DatabaseConfig;
use fleet_backoffice::config::environment::EnvironmentConfig;
use fleet_backoffice::models::lookup::LOOKUP_RESOURCES;
use fleet_backoffice::routes::create_app;
use fleet_backoffice::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Fleet Back Office API");
    info!("========================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match DatabaseConfig::default().create_pool().await {
        Ok(pool) => {
            info!("✅ PostgreSQL conectado exitosamente");
            pool
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;

    let state = AppState::new(pool, config);
    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Autenticación:");
    info!("   POST /api/users/register - Registrar usuario");
    info!("   POST /api/users/login - Login (cookie `token` + body)");
    info!("   POST /api/users/logout - Logout");
    info!("   GET  /api/users/me - Usuario actual");
    info!("🚗 Recursos operacionales:");
    info!("   /api/vehicles (+ /import, /import/template)");
    info!("   /api/clients, /api/suppliers, /api/contracts, /api/rentals");
    info!("   /api/maintenance, /api/disposals, /api/insurances");
    info!("   /api/inspections, /api/tires, /api/services");
    info!("📊 Informes:");
    info!("   /api/reports (+ /vehicle_list, /active_vehicle_count,");
    info!("                   /rental_count_by_client, /vehicles_in_maintenance)");
    info!("📚 Tablas de definición ({} recursos):", LOOKUP_RESOURCES.len());
    for resource in LOOKUP_RESOURCES {
        info!("   {}", resource.path);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
