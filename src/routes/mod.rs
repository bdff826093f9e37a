use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::json;

use crate::services::places_provider::PlacesProvider;

pub mod health;
pub mod itinerary;
pub mod location;
pub mod search;

pub(crate) fn error_response(status: actix_web::http::StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": message }))
}

async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

/// Mount every route under `/api`, plus `/health` at the root. Unknown paths
/// get a JSON 404.
pub fn configure<P: PlacesProvider + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check::<P>))
        .default_service(web::route().to(not_found));
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check::<P>))
            .route("/geocode", web::post().to(location::geocode::<P>))
            .route(
                "/search-attractions",
                web::post().to(search::search_attractions::<P>),
            )
            .route(
                "/search-restaurants",
                web::post().to(search::search_restaurants::<P>),
            )
            .route(
                "/generate-itinerary",
                web::post().to(itinerary::generate::<P>),
            )
            .route("/city-tips", web::post().to(itinerary::city_tips)),
    );
}
