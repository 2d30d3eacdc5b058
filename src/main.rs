use commande_service::config::AppConfig;
use commande_service::{build_server, build_service, create_pool, run_migrations};
use dotenvy::dotenv;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let pool = create_pool(&config.database_url).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    log::info!(
        "Starting server at http://{}:{} (listing commandes from the last {})",
        config.host,
        config.port,
        config.retention
    );

    let service = build_service(pool, config.retention);
    build_server(service, &config.host, config.port)?.await
}
