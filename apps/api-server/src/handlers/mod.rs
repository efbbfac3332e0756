//! HTTP handlers and route configuration.

mod fallback;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::json_error_handler;

pub use posts::post_view;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/health")
                .route(web::get().to(health::health_check))
                .default_service(web::to(fallback::method_not_allowed)),
        )
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post))
                        .default_service(web::to(fallback::method_not_allowed)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(posts::get_post))
                        .route(web::put().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post))
                        .default_service(web::to(fallback::method_not_allowed)),
                )
                .default_service(web::to(fallback::route_not_found)),
        )
        .default_service(web::to(fallback::route_not_found));
}
