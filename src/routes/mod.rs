use actix_web::{error, web, HttpRequest, Scope};

use crate::error::ApiError;
use crate::middleware::auth::AuthMiddleware;

pub mod bookings;
pub mod catalog;
pub mod health;
pub mod quotes;

/// Registers every route of the API.
pub fn config(cfg: &mut web::ServiceConfig, jwt_secret: &str) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/health", web::get().to(health::health_check))
        .service(api_scope(jwt_secret));
}

// Extractor failures use the same `{error, message}` body as handler errors
fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query: {}", err)).into()
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid body: {}", err)).into()
}

fn api_scope(jwt_secret: &str) -> Scope {
    web::scope("/api")
        // Public routes
        .route("/destinations", web::get().to(catalog::get_destinations))
        .route("/destinations/{id}", web::get().to(catalog::get_destination))
        .route("/accommodations", web::get().to(catalog::get_accommodations))
        .route(
            "/accommodations/{id}",
            web::get().to(catalog::get_accommodation),
        )
        .route("/vehicles", web::get().to(catalog::get_vehicles))
        .route("/vehicles/{id}", web::get().to(catalog::get_vehicle))
        .route("/guides", web::get().to(catalog::get_tour_guides))
        .route("/guides/{id}", web::get().to(catalog::get_tour_guide))
        .route("/quotes", web::post().to(quotes::create_quote))
        // Protected routes
        .service(
            web::resource("/bookings")
                .wrap(AuthMiddleware::new(jwt_secret))
                .route(web::post().to(bookings::create_booking)),
        )
        .service(
            web::resource("/account/bookings")
                .wrap(AuthMiddleware::new(jwt_secret))
                .route(web::get().to(bookings::get_my_bookings)),
        )
}
