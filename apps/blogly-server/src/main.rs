//! # Blogly Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blogly on {}:{}", config.host, config.port);

    let db = blogly_infra::connect(&config.database)
        .await
        .map_err(startup_error)?;

    // Bring the schema up to date; already-applied migrations are skipped.
    Migrator::up(&db, None).await.map_err(startup_error)?;
    tracing::info!("Database schema is up to date");

    let templates = views::load_templates(&config.templates_glob).map_err(startup_error)?;
    let state = AppState::new(db, templates);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn startup_error(err: impl std::fmt::Display) -> std::io::Error {
    tracing::error!("Startup failed: {}", err);
    std::io::Error::other(err.to_string())
}
