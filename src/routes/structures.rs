use actix_web::web;

use crate::handlers::structures;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/structures")
            .route("", web::post().to(structures::create_structure))
            .route("/", web::post().to(structures::create_structure))
            .route("", web::get().to(structures::get_structures))
            .route("/", web::get().to(structures::get_structures))
            .route("/{id}", web::get().to(structures::get_structure))
            .route("/{id}", web::put().to(structures::update_structure))
            .route("/{id}", web::delete().to(structures::delete_structure)),
    );
}
