use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::routes::error_response;
use crate::services::itinerary_generation_service::ItineraryGenerator;
use crate::services::places_provider::PlacesProvider;

#[derive(Debug, Deserialize)]
pub struct CityInput {
    #[serde(default)]
    city: String,
    #[serde(default)]
    interests: Option<Vec<String>>,
}

/*
    /api/search-attractions
*/
pub async fn search_attractions<P: PlacesProvider + 'static>(
    generator: web::Data<ItineraryGenerator<P>>,
    input: web::Json<CityInput>,
) -> impl Responder {
    if input.city.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "City is required");
    }

    let interests = input.interests.clone().unwrap_or_default();
    let deadline = generator.config().request_deadline();
    match generator
        .search_attractions(&input.city, &interests, deadline)
        .await
    {
        Ok(attractions) => HttpResponse::Ok().json(json!({ "attractions": attractions })),
        Err(err) => error_response(StatusCode::NOT_FOUND, &err.to_string()),
    }
}

/*
    /api/search-restaurants
*/
pub async fn search_restaurants<P: PlacesProvider + 'static>(
    generator: web::Data<ItineraryGenerator<P>>,
    input: web::Json<CityInput>,
) -> impl Responder {
    if input.city.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "City is required");
    }

    let deadline = generator.config().request_deadline();
    match generator.search_restaurants(&input.city, deadline).await {
        Ok(restaurants) => HttpResponse::Ok().json(json!({ "restaurants": restaurants })),
        Err(err) => error_response(StatusCode::NOT_FOUND, &err.to_string()),
    }
}
