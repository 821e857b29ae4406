//! HTTP handlers and route configuration.

#[cfg(test)]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .configure(crate::handlers::configure_routes),
        )
        .await
    };
}

mod feed;
mod generate;
mod health;
mod params;
mod publish;

use actix_web::web;

use crate::middleware::error::{json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::resource("/feed")
                        .route(web::get().to(feed::list))
                        .route(web::put().to(feed::update_hearts)),
                )
                .route("/feed/{id}/hearts", web::post().to(feed::add_heart))
                .route("/publish", web::post().to(publish::publish))
                .route("/generate", web::post().to(generate::generate)),
        );
}
