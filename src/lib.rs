pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::sync::Arc;

use actix_web::{error, middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::commande_service::CommandeService;
use crate::config::RetentionWindow;
use crate::domain::ports::CommandeRepository;
use crate::handlers::commandes::SharedService;
use crate::infrastructure::commande_repo::DieselCommandeRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::commandes::list_commandes,
        handlers::commandes::get_commande,
        handlers::commandes::create_commande,
        handlers::commandes::update_commande,
        handlers::commandes::delete_commande,
    ),
    components(schemas(application::dto::CommandeDto)),
    tags((name = "commandes", description = "Commande management"))
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Wire the Postgres-backed service.
pub fn build_service(pool: DbPool, retention: RetentionWindow) -> web::Data<SharedService> {
    let repo: Arc<dyn CommandeRepository> = Arc::new(DieselCommandeRepository::new(pool));
    web::Data::new(CommandeService::new(repo, retention))
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(serde_json::json!({
        "error": err.to_string()
    }));
    error::InternalError::from_response(err, response).into()
}

/// Register the `/api/commandes` routes and their shared state.
pub fn configure(service: web::Data<SharedService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(service)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(
                web::scope("/api/commandes")
                    .route("", web::get().to(handlers::commandes::list_commandes))
                    .route("", web::post().to(handlers::commandes::create_commande))
                    .route("/{id}", web::get().to(handlers::commandes::get_commande))
                    .route("/{id}", web::put().to(handlers::commandes::update_commande))
                    .route("/{id}", web::delete().to(handlers::commandes::delete_commande)),
            );
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: web::Data<SharedService>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let openapi = ApiDoc::openapi();
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure(service.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
