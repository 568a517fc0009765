pub mod auth;
pub mod health;
pub mod todos;

use actix_web::web;

/// Public routes: registration and login.
pub fn public_config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::register).service(auth::login);
}

/// Protected routes, mounted under `/api` behind `AuthMiddleware`.
pub fn protected_config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::me).service(
        web::scope("/todos")
            .service(todos::list_todos)
            .service(todos::create_todo)
            .service(todos::update_todo)
            .service(todos::delete_todo),
    );
}
