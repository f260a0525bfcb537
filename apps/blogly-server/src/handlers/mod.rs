//! HTTP handlers and route configuration.

mod home;
mod posts;
mod tags;
mod users;


use actix_web::http::header;
use actix_web::{HttpResponse, web};

/// Configure all application routes.
///
/// Literal segments such as `/users/new` are registered before their
/// `{id}` siblings.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::recent_posts))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list))
                .service(
                    web::resource("/new")
                        .route(web::get().to(users::new_form))
                        .route(web::post().to(users::create)),
                )
                .route("/{id}", web::get().to(users::show))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(users::edit_form))
                        .route(web::post().to(users::update)),
                )
                .route("/{id}/delete", web::post().to(users::delete))
                .service(
                    web::resource("/{id}/posts/new")
                        .route(web::get().to(posts::new_form))
                        .route(web::post().to(posts::create)),
                ),
        )
        .service(
            web::scope("/posts")
                .route("/{id}", web::get().to(posts::show))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(posts::edit_form))
                        .route(web::post().to(posts::update)),
                )
                .route("/{id}/delete", web::post().to(posts::delete)),
        )
        .service(
            web::scope("/tags")
                .route("", web::get().to(tags::list))
                .service(
                    web::resource("/new")
                        .route(web::get().to(tags::new_form))
                        .route(web::post().to(tags::create)),
                )
                .route("/{id}", web::get().to(tags::show))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(tags::edit_form))
                        .route(web::post().to(tags::update)),
                )
                .route("/{id}/delete", web::post().to(tags::delete)),
        );
}

/// 302 to `location`, the response to every successful form submission.
fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}
