use actix_web::web;

use crate::handlers::home::home;

mod admin;
mod auth;
mod content;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(admin::config_routes)
            .configure(auth::config_routes)
            .configure(content::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
