use actix_web::web;

pub mod auth;
pub mod items;
pub mod students;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(students::index)
        .service(students::create)
        .service(students::delete)
        .service(students::update_form)
        .service(students::update_apply)
        .service(auth::register_form)
        .service(auth::register)
        .service(auth::login_form)
        .service(auth::login)
        .service(auth::logout)
        .service(auth::dashboard)
        .service(
            web::scope("/items")
                .service(items::list)
                .service(items::create)
                .service(items::get_one)
                .service(items::update)
                .service(items::delete),
        );
}
