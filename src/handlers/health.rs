use actix_web::{HttpResponse, Responder, get};

use crate::database::models::format::TIMESTAMP_FORMAT;

#[get("/")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Compensation & Benefits API v1.0")
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }))
}
