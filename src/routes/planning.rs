use actix_web::{web, HttpResponse};

use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/planning/slots").route(web::get().to(list_slots)))
        .service(web::resource("/planning/external").route(web::get().to(list_external)));
}

async fn list_slots(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.list_slots())
}

async fn list_external(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.calendar.events())
}
