use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::models::itinerary::ItineraryRequest;
use crate::routes::error_response;
use crate::services::duration_service::estimate_duration;
use crate::services::itinerary_generation_service::{ItineraryGenerator, TRAVEL_TIPS};
use crate::services::places_provider::PlacesProvider;

/*
    /api/generate-itinerary
*/
pub async fn generate<P: PlacesProvider + 'static>(
    generator: web::Data<ItineraryGenerator<P>>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let request = input.into_inner();
    if request.city.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "City is required");
    }

    let config = generator.config();
    let duration_days = estimate_duration(
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        config.default_duration_days,
    );
    if duration_days > config.max_duration_days {
        return error_response(
            StatusCode::BAD_REQUEST,
            &format!(
                "Trip cannot be longer than {} days",
                config.max_duration_days
            ),
        );
    }

    let deadline = generator.config().request_deadline();
    match generator.generate_itinerary(&request, deadline).await {
        Ok(itinerary) => HttpResponse::Ok().json(itinerary),
        Err(err) => error_response(StatusCode::NOT_FOUND, &err.to_string()),
    }
}

#[derive(Debug, Deserialize)]
pub struct TipsInput {
    #[serde(default)]
    city: String,
}

/*
    /api/city-tips
*/
pub async fn city_tips(input: web::Json<TipsInput>) -> impl Responder {
    if input.city.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "City is required");
    }
    HttpResponse::Ok().json(json!({ "tips": TRAVEL_TIPS }))
}
