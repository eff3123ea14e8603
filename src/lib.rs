use actix_cors::Cors;
use actix_session::{SessionMiddleware, config::PersistentSession, storage::CookieSessionStore};
use actix_web::cookie::{Key, time::Duration};
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::routes::api::{api_v1_create_creditcards, api_v1_search_creditcards};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

const SESSION_COOKIE_NAME: &str = "qid";
const SESSION_TTL_DAYS: i64 = 7;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let secret_key = Key::derive_from(server_config.secret.as_bytes());

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        let cors = match &server_config.frontend_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_header()
                .allow_any_method()
                .supports_credentials(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(cors)
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_name(SESSION_COOKIE_NAME.to_string())
                    .cookie_http_only(true)
                    .cookie_secure(false) // set to true in prod
                    .session_lifecycle(
                        PersistentSession::default().session_ttl(Duration::days(SESSION_TTL_DAYS)),
                    )
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(api_v1_search_creditcards)
                    .service(api_v1_create_creditcards),
            )
            .app_data(web::Data::new(pool.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
