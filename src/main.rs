mod config;
mod state;
mod database;
mod utils;
mod models;
mod middleware;
mod controllers;
mod repositories;
mod routes;
mod dto;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Diario de Conducción - API REST");
    info!("==================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Crear las tablas si hace falta
    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error inicializando el schema: {}", e);
        return Err(e);
    }

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, config);

    info!("🌍 Entorno: {}", app_state.config.environment);
    if app_state.config.is_production() && app_state.config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío en producción");
    }

    let cors = if app_state.config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(app_state.config.cors_origins.clone())
    };

    // Crear router de la API
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state.clone());

    let addr: SocketAddr = app_state.config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("🧑 Endpoints - Drivers:");
    info!("   POST   /api/drivers - Crear conductor");
    info!("   GET    /api/drivers - Listar conductores");
    info!("   GET    /api/drivers/:pseudonym - Obtener conductor");
    info!("   PUT    /api/drivers/:pseudonym - Reemplazar conductor");
    info!("   DELETE /api/drivers/:pseudonym - Eliminar conductor");
    info!("📍 Endpoints - Locations:");
    info!("   POST   /api/drivers/:pseudonym/locations - Crear ubicación");
    info!("   GET    /api/drivers/:pseudonym/locations - Listar ubicaciones");
    info!("   GET    /api/drivers/:pseudonym/locations/:id - Obtener ubicación");
    info!("   PUT    /api/drivers/:pseudonym/locations/:id - Reemplazar ubicación");
    info!("   DELETE /api/drivers/:pseudonym/locations/:id - Eliminar ubicación");
    info!("🛣️ Endpoints - Rides:");
    info!("   POST   /api/drivers/:pseudonym/rides - Crear trayecto");
    info!("   GET    /api/drivers/:pseudonym/rides - Listar trayectos");
    info!("   GET    /api/drivers/:pseudonym/rides/:id - Obtener trayecto");
    info!("   PUT    /api/drivers/:pseudonym/rides/:id - Reemplazar trayecto");
    info!("   DELETE /api/drivers/:pseudonym/rides/:id - Eliminar trayecto");
    info!("🚏 Endpoints - Stops (solo lectura):");
    info!("   GET    /api/drivers/:pseudonym/stops - Listar paradas");
    info!("   GET    /api/drivers/:pseudonym/stops/:id - Obtener parada");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
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
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
