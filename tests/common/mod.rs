#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use actix_web::{web, App};
use tokio::time::sleep;

use travel_itinerary_api::models::{
    location::ResolvedLocation,
    place::{Candidate, Coordinate, PlaceDetails},
    search::SearchQuery,
};
use travel_itinerary_api::routes;
use travel_itinerary_api::services::{
    itinerary_generation_service::{ItineraryGenerationConfig, ItineraryGenerator},
    places_provider::{PlacesError, PlacesProvider},
};

/// In-memory stand-in for the Google Maps gateway.
///
/// Unknown searches return nothing; unknown detail keys fail.
#[derive(Default)]
pub struct FakePlacesProvider {
    locations: HashMap<String, ResolvedLocation>,
    geocode_error: bool,
    searches: HashMap<String, Option<Vec<Candidate>>>,
    details: HashMap<String, PlaceDetails>,
    detail_delays: HashMap<String, Duration>,
    pub search_log: Mutex<Vec<String>>,
    pub detail_log: Mutex<Vec<String>>,
}

pub fn candidate(key: &str, types: &[&str]) -> Candidate {
    Candidate {
        identity_key: key.to_string(),
        name: format!("Place {}", key),
        raw_types: types.iter().map(|t| t.to_string()).collect(),
        rating: Some(4.5),
        formatted_address: format!("{} Main St", key),
        coordinate: Some(Coordinate::new(48.85, 2.35)),
    }
}

pub fn details_for(candidate: &Candidate) -> PlaceDetails {
    PlaceDetails {
        name: Some(candidate.name.clone()),
        rating: candidate.rating,
        user_ratings_total: Some(100),
        formatted_address: Some(candidate.formatted_address.clone()),
        types: candidate.raw_types.clone(),
        photos: (0..5).map(|i| format!("https://photos/{}/{}", candidate.identity_key, i)).collect(),
        ..Default::default()
    }
}

pub fn keys(prefix: &str, range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("{}{}", prefix, i)).collect()
}

impl FakePlacesProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, name: &str) -> Self {
        self.locations.insert(
            name.to_string(),
            ResolvedLocation {
                lat: 48.8566,
                lng: 2.3522,
                formatted_address: format!("{}, Somewhere", name),
            },
        );
        self
    }

    pub fn with_geocode_error(mut self) -> Self {
        self.geocode_error = true;
        self
    }

    /// Register a search whose results have working details.
    pub fn with_search(mut self, query: &str, keys: &[String], types: &[&str]) -> Self {
        let candidates: Vec<Candidate> = keys.iter().map(|k| candidate(k, types)).collect();
        for c in &candidates {
            self.details
                .entry(c.identity_key.clone())
                .or_insert_with(|| details_for(c));
        }
        self.searches.insert(query.to_string(), Some(candidates));
        self
    }

    pub fn with_failing_search(mut self, query: &str) -> Self {
        self.searches.insert(query.to_string(), None);
        self
    }

    pub fn with_failing_details(mut self, key: &str) -> Self {
        self.details.remove(key);
        self
    }

    pub fn with_price_level(mut self, key: &str, level: i64) -> Self {
        if let Some(details) = self.details.get_mut(key) {
            details.price_level = Some(level);
        }
        self
    }

    pub fn with_detail_delay(mut self, key: &str, millis: u64) -> Self {
        self.detail_delays
            .insert(key.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn searched(&self) -> Vec<String> {
        self.search_log.lock().unwrap().clone()
    }

    pub fn detailed(&self) -> Vec<String> {
        self.detail_log.lock().unwrap().clone()
    }
}

impl PlacesProvider for FakePlacesProvider {
    async fn geocode(&self, address: &str) -> Result<Option<ResolvedLocation>, PlacesError> {
        if self.geocode_error {
            return Err(PlacesError::StatusError("OVER_QUERY_LIMIT".to_string()));
        }
        Ok(self.locations.get(address).cloned())
    }

    async fn text_search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, PlacesError> {
        self.search_log.lock().unwrap().push(query.text.clone());
        match self.searches.get(&query.text) {
            Some(Some(results)) => Ok(results.clone()),
            Some(None) => Err(PlacesError::MalformedResponse("garbled".to_string())),
            None => Ok(Vec::new()),
        }
    }

    async fn place_details(&self, identity_key: &str) -> Result<PlaceDetails, PlacesError> {
        self.detail_log.lock().unwrap().push(identity_key.to_string());
        if let Some(delay) = self.detail_delays.get(identity_key) {
            sleep(*delay).await;
        }
        self.details
            .get(identity_key)
            .cloned()
            .ok_or_else(|| PlacesError::StatusError("NOT_FOUND".to_string()))
    }
}

pub fn generator(provider: FakePlacesProvider) -> ItineraryGenerator<FakePlacesProvider> {
    ItineraryGenerator::with_config(provider, ItineraryGenerationConfig::default())
}

pub fn create_app(
    generator: ItineraryGenerator<FakePlacesProvider>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(generator))
        .configure(routes::configure::<FakePlacesProvider>)
}

/// A Paris fixture with 12 attraction candidates spread over two queries
/// (one overlapping) and 6 restaurants.
pub fn paris_provider() -> FakePlacesProvider {
    let first = keys("a", 0..8);
    let mut second = keys("a", 6..12);
    second.insert(0, "a0".to_string());
    let restaurants = keys("r", 0..6);

    FakePlacesProvider::new()
        .with_city("Paris")
        .with_search("tourist attractions in Paris", &first, &["tourist_attraction"])
        .with_search("things to do in Paris", &second, &["museum"])
        .with_search("best restaurants in Paris", &restaurants, &["restaurant"])
}
