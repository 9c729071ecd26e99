use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{ClientInput, ClientStatus};
use crate::state::AppState;

#[derive(Deserialize)]
struct ClientFilter {
    search: Option<String>,
    city: Option<String>,
    status: Option<ClientStatus>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/clients")
            .route(web::get().to(list_clients))
            .route(web::post().to(create_client)),
    )
    .service(
        web::resource("/clients/{id}")
            .route(web::get().to(get_client))
            .route(web::put().to(update_client))
            .route(web::delete().to(delete_client)),
    );
}

async fn list_clients(
    state: web::Data<AppState>,
    query: web::Query<ClientFilter>,
) -> HttpResponse {
    let filter = query.into_inner();
    let clients = state.store.list_clients(
        filter.search.as_deref(),
        filter.city.as_deref(),
        filter.status,
    );
    HttpResponse::Ok().json(clients)
}

async fn create_client(
    state: web::Data<AppState>,
    payload: web::Json<ClientInput>,
) -> Result<HttpResponse, ApiError> {
    let client = state.store.create_client(payload.into_inner())?;
    Ok(HttpResponse::Created().json(client))
}

async fn get_client(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let client = state.store.get_client(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(client))
}

async fn update_client(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ClientInput>,
) -> Result<HttpResponse, ApiError> {
    let client = state
        .store
        .update_client(&path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(client))
}

async fn delete_client(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.store.delete_client(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
