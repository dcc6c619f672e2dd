mod handlers;
mod server_state;

use crate::{
    api::Api,
    config::{Config, RawConfig},
    database::Database,
    server::handlers::TaskboardOpenApi,
};
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub use server_state::{ServerState, Status};

pub async fn run(raw_config: RawConfig) -> Result<(), anyhow::Error> {
    let database = Database::create(
        PgPoolOptions::new()
            .max_connections(raw_config.db.max_connections)
            .connect(&Database::connection_url(&raw_config.db)?)
            .await?,
    )
    .await?;

    let http_port = raw_config.port;
    let api = Arc::new(Api::new(Config::from(raw_config), database));

    let state = web::Data::new(ServerState::new(api));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compat::new(TracingLogger::default()))
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .service(RapiDoc::with_openapi(
                "/api-docs/openapi.json",
                TaskboardOpenApi::openapi(),
            ))
            .service(handlers::status_get::status_get)
            .service(handlers::tasks_list::tasks_list)
            .service(handlers::tasks_create::tasks_create)
            .service(handlers::tasks_get::tasks_get)
            .service(handlers::tasks_update::tasks_update)
            .service(handlers::tasks_complete::tasks_complete)
            .service(handlers::tasks_remove::tasks_remove)
            .service(
                web::resource("/ingest")
                    .route(web::post().to(handlers::tasks_ingest::tasks_ingest))
                    .route(web::route().to(handlers::tasks_ingest::tasks_ingest_unsupported_method)),
            )
            .wrap(Cors::permissive())
    });

    let http_server_url = format!("0.0.0.0:{}", http_port);
    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {http_server_url}."))?;

    info!("Taskboard API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .context("Failed to run Taskboard API server.")
}
