use actix_web::web;
use sqlx::PgPool;

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::{EmployeeCompensationService, SalaryStructureService};

use handlers::shared::{json_error_handler, path_error_handler};

/// Registers services, extractor configuration and every route on an app.
pub fn configure_app(pool: PgPool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(SalaryStructureService::new(pool.clone())))
            .app_data(web::Data::new(EmployeeCompensationService::new(pool)))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(handlers::health::hello)
            .service(handlers::health::health)
            .configure(routes::configure);
    }
}
