use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
struct ServiceFilter {
    active: Option<bool>,
    category: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/services").route(web::get().to(list_services)))
        .service(web::resource("/services/{id}").route(web::get().to(get_service)));
}

async fn list_services(
    state: web::Data<AppState>,
    query: web::Query<ServiceFilter>,
) -> HttpResponse {
    let filter = query.into_inner();
    let services = state
        .store
        .list_services(filter.active, filter.category.as_deref());
    HttpResponse::Ok().json(services)
}

async fn get_service(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let service = state.store.get_service(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(service))
}
