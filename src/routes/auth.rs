use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

// Stub credentials; a real deployment would replace this whole module.
const ADMIN_EMAIL: &str = "admin@washandgo.example";
const ADMIN_PASSWORD: &str = "admin";

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct AuthPayload {
    access_token: String,
    token_type: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth/login").route(web::post().to(login)))
        .service(web::resource("/auth/me").route(web::get().to(me)));
}

async fn login(payload: web::Json<LoginRequest>) -> HttpResponse {
    if payload.email != ADMIN_EMAIL || payload.password != ADMIN_PASSWORD {
        return HttpResponse::Unauthorized().json(json!({ "detail": "Invalid credentials" }));
    }
    HttpResponse::Ok().json(AuthPayload {
        access_token: "fake-token".to_string(),
        token_type: "bearer".to_string(),
    })
}

async fn me() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "id": "user-1",
        "name": "Marion Lefevre",
        "email": ADMIN_EMAIL,
        "role": "Administrator",
    }))
}
