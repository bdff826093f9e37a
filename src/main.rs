use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use travel_itinerary_api::routes;
use travel_itinerary_api::services::{
    google_maps_service::GoogleMapsGateway,
    itinerary_generation_service::{ItineraryGenerationConfig, ItineraryGenerator},
};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let gateway = GoogleMapsGateway::from_env().map_err(|e| {
        error!("Google Maps gateway unavailable: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;
    let config = ItineraryGenerationConfig::from_env();
    info!("Itinerary generation config: {:?}", config);

    let generator = web::Data::new(ItineraryGenerator::with_config(gateway, config));

    info!("Binding to {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(generator.clone())
            .configure(routes::configure::<GoogleMapsGateway>)
    })
    .bind((host, port))?
    .run()
    .await
}
