use actix_web::web;

pub mod compensation;
pub mod structures;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(structures::configure)
        .configure(compensation::configure);
}
