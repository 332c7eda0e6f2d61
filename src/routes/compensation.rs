use actix_web::web;

use crate::handlers::compensation;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees").service(
            web::resource("/{employee_id}/compensation")
                .route(web::post().to(compensation::assign_compensation))
                .route(web::get().to(compensation::get_compensation))
                .route(web::put().to(compensation::update_compensation)),
        ),
    );
}
