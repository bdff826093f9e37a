use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::routes::error_response;
use crate::services::itinerary_generation_service::ItineraryGenerator;
use crate::services::places_provider::PlacesProvider;

#[derive(Debug, Deserialize)]
pub struct GeocodeInput {
    #[serde(default)]
    address: String,
}

/*
    /api/geocode
*/
pub async fn geocode<P: PlacesProvider + 'static>(
    generator: web::Data<ItineraryGenerator<P>>,
    input: web::Json<GeocodeInput>,
) -> impl Responder {
    if input.address.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Address is required");
    }

    let deadline = generator.config().request_deadline();
    match generator.resolve_location(&input.address, deadline).await {
        Ok(location) => HttpResponse::Ok().json(location),
        Err(_) => error_response(StatusCode::NOT_FOUND, "Could not geocode address"),
    }
}
