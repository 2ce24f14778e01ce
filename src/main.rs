use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, web, App, HttpServer};
use std::sync::Arc;

use rollbook::config::EnvConfig;
use rollbook::db::sqlite_service::SqliteService;
use rollbook::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let store = Arc::new(
        SqliteService::new(&config.db_url)
            .await
            .expect("Failed to initialize SqliteService"),
    );

    let session_key = Key::derive_from(config.session_secret.as_bytes());

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
