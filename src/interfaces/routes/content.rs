use actix_web::web;

use crate::handlers::{about, contact, messages, projects, resume, system, views};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(system::health_check)
        .service(
            web::scope("/projects")
                .service(
                    web::resource("")
                        .route(web::get().to(projects::list_projects))
                )
                .service(
                    web::resource("/featured")
                        .route(web::get().to(projects::list_featured_projects))
                )
                .service(
                    web::resource("/{slug}")
                        .route(web::get().to(projects::get_project))
                )
        )
        .service(web::resource("/about").route(web::get().to(about::get_about)))
        .service(web::resource("/resume").route(web::get().to(resume::get_resume)))
        .service(web::resource("/contact").route(web::get().to(contact::get_contact)))
        .service(web::resource("/messages").route(web::post().to(messages::submit_message)))
        .service(web::resource("/views").route(web::get().to(views::list_views)));
}
