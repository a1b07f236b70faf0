mod config;
mod generations;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::Config;
use crate::generations::state::GenerationsState;
use crate::services::analytics::AnalyticsState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let (host, port) = (config.host.clone(), config.port);

    services::analytics::init_db(&config.db_path).map_err(std::io::Error::other)?;

    let registry = GenerationsState::new();
    let analytics_state = AnalyticsState {
        db_path: config.db_path.clone(),
    };

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(registry.clone()))
            .app_data(web::Data::new(analytics_state.clone()))
            .service(services::templates::configure_routes())
            .service(services::websites::configure_routes())
            .service(services::analytics::configure_routes())
    })
    .bind((host, port))?
    .run()
    .await
}
