use actix_web::{web, HttpResponse};
use serde_json::json;

pub mod auth;
pub mod clients;
pub mod engagements;
pub mod planning;
pub mod services;
pub mod stats;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)))
        .configure(auth::configure)
        .configure(clients::configure)
        .configure(services::configure)
        .configure(engagements::configure)
        .configure(planning::configure)
        .configure(stats::configure);
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
