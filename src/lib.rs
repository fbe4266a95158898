//! Veterinary clinic backend: appointments, vets and owner reviews over a
//! JSON API backed by SQLite.

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting clinic API on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
