use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::EngagementInput;
use crate::state::AppState;

#[derive(Deserialize)]
struct EngagementFilter {
    status: Option<String>,
}

// Served under /prestations, the path the existing front office calls.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/prestations")
            .route(web::get().to(list_engagements))
            .route(web::post().to(create_engagement)),
    )
    .service(
        web::resource("/prestations/{id}")
            .route(web::get().to(get_engagement))
            .route(web::put().to(update_engagement)),
    );
}

async fn list_engagements(
    state: web::Data<AppState>,
    query: web::Query<EngagementFilter>,
) -> HttpResponse {
    let engagements = state.store.list_engagements(query.status.as_deref());
    HttpResponse::Ok().json(engagements)
}

async fn create_engagement(
    state: web::Data<AppState>,
    payload: web::Json<EngagementInput>,
) -> Result<HttpResponse, ApiError> {
    let engagement = state.store.create_engagement(payload.into_inner())?;
    Ok(HttpResponse::Created().json(engagement))
}

async fn get_engagement(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let engagement = state.store.get_engagement(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(engagement))
}

async fn update_engagement(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<EngagementInput>,
) -> Result<HttpResponse, ApiError> {
    let engagement = state
        .store
        .update_engagement(&path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(engagement))
}
