use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::application::commande_service::CommandeService;
use crate::application::dto::CommandeDto;
use crate::domain::ports::CommandeRepository;
use crate::errors::AppError;

/// The service as shared across actix workers.
pub type SharedService = CommandeService<Arc<dyn CommandeRepository>>;

// Store calls block, so every handler hops onto actix's blocking pool.

/// GET /api/commandes
///
/// Lists the commandes dated within the configured retention window.
#[utoipa::path(
    get,
    path = "/api/commandes",
    responses(
        (status = 200, description = "Recent commandes", body = [CommandeDto]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "commandes"
)]
pub async fn list_commandes(service: web::Data<SharedService>) -> Result<HttpResponse, AppError> {
    let commandes = web::block(move || service.list_recent()).await??;
    Ok(HttpResponse::Ok().json(commandes))
}

/// GET /api/commandes/{id}
#[utoipa::path(
    get,
    path = "/api/commandes/{id}",
    params(
        ("id" = i64, Path, description = "Commande id"),
    ),
    responses(
        (status = 200, description = "Commande found", body = CommandeDto),
        (status = 404, description = "Commande not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "commandes"
)]
pub async fn get_commande(
    service: web::Data<SharedService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let commande = web::block(move || service.get_commande(id)).await??;
    Ok(HttpResponse::Ok().json(commande))
}

/// POST /api/commandes
///
/// Creates a commande. The response carries the id assigned by the store.
#[utoipa::path(
    post,
    path = "/api/commandes",
    request_body = CommandeDto,
    responses(
        (status = 200, description = "Commande created", body = CommandeDto),
        (status = 400, description = "Malformed commande"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "commandes"
)]
pub async fn create_commande(
    service: web::Data<SharedService>,
    body: web::Json<CommandeDto>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner();
    let created = web::block(move || service.create_commande(dto)).await??;
    Ok(HttpResponse::Ok().json(created))
}

/// PUT /api/commandes/{id}
///
/// Replaces description, quantite, date and montant. Omitted fields are
/// cleared.
#[utoipa::path(
    put,
    path = "/api/commandes/{id}",
    params(
        ("id" = i64, Path, description = "Commande id"),
    ),
    request_body = CommandeDto,
    responses(
        (status = 200, description = "Commande updated", body = CommandeDto),
        (status = 400, description = "Malformed commande"),
        (status = 404, description = "Commande not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "commandes"
)]
pub async fn update_commande(
    service: web::Data<SharedService>,
    path: web::Path<i64>,
    body: web::Json<CommandeDto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let dto = body.into_inner();
    let updated = web::block(move || service.update_commande(id, dto)).await??;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/commandes/{id}
#[utoipa::path(
    delete,
    path = "/api/commandes/{id}",
    params(
        ("id" = i64, Path, description = "Commande id"),
    ),
    responses(
        (status = 204, description = "Commande deleted"),
        (status = 404, description = "Commande not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "commandes"
)]
pub async fn delete_commande(
    service: web::Data<SharedService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || service.delete_commande(id)).await??;
    Ok(HttpResponse::NoContent().finish())
}
