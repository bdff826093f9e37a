use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use std::env;

use crate::services::itinerary_generation_service::ItineraryGenerator;
use crate::services::places_provider::PlacesProvider;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    message: String,
    environment: String,
    version: String,
    timestamp: String,
    api_configured: bool,
}

pub async fn health_check<P: PlacesProvider + 'static>(
    generator: Option<web::Data<ItineraryGenerator<P>>>,
) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        message: "Travel itinerary server is running".to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
        api_configured: generator.is_some(),
    })
}
