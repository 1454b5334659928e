use actix_web::web;

use crate::handlers::{about, auth, contact, messages, projects, resume};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(auth::session)
            .service(auth::logout)
            .service(
                web::resource("/projects")
                    .route(web::post().to(projects::create_project))
            )
            .service(
                web::resource("/projects/{project_id}")
                    .route(web::put().to(projects::update_project))
                    .route(web::delete().to(projects::delete_project))
            )
            .service(web::resource("/about").route(web::put().to(about::save_about)))
            .service(web::resource("/resume").route(web::put().to(resume::save_resume)))
            .service(web::resource("/contact").route(web::put().to(contact::save_contact)))
            .service(
                web::resource("/messages")
                    .route(web::get().to(messages::list_messages))
            )
            .service(
                web::resource("/messages/{message_id}/read")
                    .route(web::patch().to(messages::mark_message_read))
            )
    );
}
