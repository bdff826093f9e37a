//! Google Maps Places gateway
//!
//! Implements [`PlacesProvider`] on top of the Geocoding, Places Text Search and
//! Place Details web services.
//!
//! ## Setup
//! 1. Get a Google Maps API key from Google Cloud Console
//! 2. Enable the Geocoding API and the Places API
//! 3. Set the environment variable: `GOOGLE_MAPS_API_KEY=your_api_key_here`
//!
//! Every call is a single request with a fixed client timeout. Nothing is
//! retried or cached here; callers decide what a failure means.

use std::{env, time::Duration};

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::models::{
    location::ResolvedLocation,
    place::{Candidate, Coordinate, PlaceDetails, Review},
    search::SearchQuery,
};
use crate::services::places_provider::{PlacesError, PlacesProvider};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_RESULTS_PER_QUERY: usize = 15;
const PHOTO_MAX_WIDTH: u32 = 800;
const DETAIL_FIELDS: &str = "name,rating,reviews,formatted_address,opening_hours,formatted_phone_number,website,photos,types,price_level,user_ratings_total,geometry";

#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GoogleMapsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn from_env() -> Result<Self, PlacesError> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY").map_err(|_| {
            PlacesError::ConfigurationError("GOOGLE_MAPS_API_KEY not set".to_string())
        })?;
        if api_key.trim().is_empty() {
            return Err(PlacesError::ConfigurationError(
                "GOOGLE_MAPS_API_KEY is empty".to_string(),
            ));
        }

        let base_url =
            env::var("GOOGLE_MAPS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("GOOGLE_MAPS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            base_url,
            timeout_secs,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<TextSearchResult>,
}

#[derive(Debug, Deserialize)]
struct TextSearchResult {
    place_id: Option<String>,
    name: Option<String>,
    rating: Option<f32>,
    formatted_address: Option<String>,
    #[serde(default)]
    types: Vec<String>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<DetailsResult>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    name: Option<String>,
    rating: Option<f32>,
    user_ratings_total: Option<u32>,
    formatted_address: Option<String>,
    formatted_phone_number: Option<String>,
    website: Option<String>,
    opening_hours: Option<OpeningHours>,
    price_level: Option<i64>,
    #[serde(default)]
    photos: Vec<Photo>,
    #[serde(default)]
    reviews: Vec<GoogleReview>,
    #[serde(default)]
    types: Vec<String>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    #[serde(default)]
    weekday_text: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleReview {
    author_name: Option<String>,
    rating: Option<u8>,
    text: Option<String>,
    relative_time_description: Option<String>,
}

pub struct GoogleMapsGateway {
    http_client: Client,
    config: GoogleMapsConfig,
}

impl GoogleMapsGateway {
    pub fn new(config: GoogleMapsConfig) -> Result<Self, PlacesError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn from_env() -> Result<Self, PlacesError> {
        Self::new(GoogleMapsConfig::from_env()?)
    }

    fn endpoint(&self, path: &str) -> Result<Url, PlacesError> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path))
            .map_err(|e| PlacesError::ConfigurationError(format!("Invalid base URL: {}", e)))
    }

    async fn get_text(&self, url: Url) -> Result<String, PlacesError> {
        debug!("GET {}", url.path());
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::StatusError(status.to_string()));
        }
        Ok(response.text().await?)
    }
}

impl PlacesProvider for GoogleMapsGateway {
    async fn geocode(&self, address: &str) -> Result<Option<ResolvedLocation>, PlacesError> {
        let url = geocode_url(
            self.endpoint("/maps/api/geocode/json")?,
            address,
            &self.config.api_key,
        );
        let body = self.get_text(url).await?;
        parse_geocode(&body)
    }

    async fn text_search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, PlacesError> {
        let url = text_search_url(
            self.endpoint("/maps/api/place/textsearch/json")?,
            query,
            &self.config.api_key,
        );
        let body = self.get_text(url).await?;
        parse_text_search(&body)
    }

    async fn place_details(&self, identity_key: &str) -> Result<PlaceDetails, PlacesError> {
        let url = details_url(
            self.endpoint("/maps/api/place/details/json")?,
            identity_key,
            &self.config.api_key,
        );
        let body = self.get_text(url).await?;
        let photo_endpoint = self.endpoint("/maps/api/place/photo")?;
        parse_place_details(&body, |reference| {
            photo_url(&photo_endpoint, reference, &self.config.api_key)
        })
    }
}

fn geocode_url(mut url: Url, address: &str, api_key: &str) -> Url {
    url.query_pairs_mut()
        .append_pair("address", address)
        .append_pair("key", api_key);
    url
}

/// Location and radius are only sent for anchored queries.
fn text_search_url(mut url: Url, query: &SearchQuery, api_key: &str) -> Url {
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("query", &query.text);
        if let Some(anchor) = &query.anchor {
            pairs.append_pair("location", &anchor.to_query_value());
            if let Some(radius) = query.radius_meters {
                pairs.append_pair("radius", &radius.to_string());
            }
        }
        pairs.append_pair("key", api_key);
    }
    url
}

fn details_url(mut url: Url, place_id: &str, api_key: &str) -> Url {
    url.query_pairs_mut()
        .append_pair("place_id", place_id)
        .append_pair("fields", DETAIL_FIELDS)
        .append_pair("key", api_key);
    url
}

fn parse_geocode(body: &str) -> Result<Option<ResolvedLocation>, PlacesError> {
    let response: GeocodeResponse = serde_json::from_str(body).map_err(|e| {
        PlacesError::MalformedResponse(format!("Failed to parse geocode response: {}", e))
    })?;

    match response.status.as_str() {
        "OK" => Ok(response.results.into_iter().next().map(|first| ResolvedLocation {
            lat: first.geometry.location.lat,
            lng: first.geometry.location.lng,
            formatted_address: first.formatted_address,
        })),
        "ZERO_RESULTS" => Ok(None),
        other => Err(PlacesError::StatusError(other.to_string())),
    }
}

fn parse_text_search(body: &str) -> Result<Vec<Candidate>, PlacesError> {
    let response: TextSearchResponse = serde_json::from_str(body).map_err(|e| {
        PlacesError::MalformedResponse(format!("Failed to parse text search response: {}", e))
    })?;

    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(Vec::new()),
        other => return Err(PlacesError::StatusError(other.to_string())),
    }

    // Results without a place id cannot be deduplicated or enriched.
    let candidates = response
        .results
        .into_iter()
        .take(MAX_RESULTS_PER_QUERY)
        .filter_map(|result| {
            let identity_key = result.place_id?;
            Some(Candidate {
                identity_key,
                name: result.name.unwrap_or_default(),
                raw_types: result.types,
                rating: result.rating,
                formatted_address: result.formatted_address.unwrap_or_default(),
                coordinate: result
                    .geometry
                    .map(|g| Coordinate::new(g.location.lat, g.location.lng)),
            })
        })
        .collect();

    Ok(candidates)
}

fn parse_place_details<F>(body: &str, photo_url: F) -> Result<PlaceDetails, PlacesError>
where
    F: Fn(&str) -> String,
{
    let response: DetailsResponse = serde_json::from_str(body).map_err(|e| {
        PlacesError::MalformedResponse(format!("Failed to parse place details response: {}", e))
    })?;

    if response.status != "OK" {
        return Err(PlacesError::StatusError(response.status));
    }
    let place = response
        .result
        .ok_or_else(|| PlacesError::MalformedResponse("Details response has no result".into()))?;

    let photos = place
        .photos
        .iter()
        .filter_map(|photo| photo.photo_reference.as_deref())
        .map(|reference| photo_url(reference))
        .collect();

    let reviews = place
        .reviews
        .into_iter()
        .map(|review| Review {
            author: review.author_name.unwrap_or_else(|| "Anonymous".to_string()),
            rating: review.rating.unwrap_or(0),
            text: review.text.unwrap_or_default(),
            relative_time: review.relative_time_description.unwrap_or_default(),
        })
        .collect();

    Ok(PlaceDetails {
        name: place.name,
        rating: place.rating,
        user_ratings_total: place.user_ratings_total,
        formatted_address: place.formatted_address,
        phone: place.formatted_phone_number,
        website: place.website,
        opening_hours: place
            .opening_hours
            .map(|hours| hours.weekday_text)
            .unwrap_or_default(),
        price_level: place.price_level,
        photos,
        reviews,
        types: place.types,
        coordinate: place
            .geometry
            .map(|g| Coordinate::new(g.location.lat, g.location.lng)),
    })
}

fn photo_url(endpoint: &Url, reference: &str, api_key: &str) -> String {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("maxwidth", &PHOTO_MAX_WIDTH.to_string())
        .append_pair("photoreference", reference)
        .append_pair("key", api_key);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geocode_takes_first_result() {
        let body = json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "Paris, France",
                    "geometry": { "location": { "lat": 48.8566, "lng": 2.3522 } }
                },
                {
                    "formatted_address": "Paris, TX, USA",
                    "geometry": { "location": { "lat": 33.66, "lng": -95.55 } }
                }
            ]
        })
        .to_string();

        let location = parse_geocode(&body).unwrap().unwrap();
        assert_eq!(location.formatted_address, "Paris, France");
        assert_eq!(location.lat, 48.8566);
    }

    #[test]
    fn test_geocode_zero_results_is_not_found() {
        let body = json!({ "status": "ZERO_RESULTS", "results": [] }).to_string();
        assert!(parse_geocode(&body).unwrap().is_none());
    }

    #[test]
    fn test_geocode_denied_is_error() {
        let body = json!({ "status": "REQUEST_DENIED" }).to_string();
        assert!(matches!(
            parse_geocode(&body),
            Err(PlacesError::StatusError(status)) if status == "REQUEST_DENIED"
        ));
    }

    #[test]
    fn test_text_search_skips_results_without_place_id() {
        let body = json!({
            "status": "OK",
            "results": [
                { "place_id": "a", "name": "Louvre", "types": ["museum"], "rating": 4.7 },
                { "name": "Nameless" },
                { "place_id": "b", "name": "Tuileries" }
            ]
        })
        .to_string();

        let candidates = parse_text_search(&body).unwrap();
        let keys: Vec<&str> = candidates.iter().map(|c| c.identity_key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(candidates[0].raw_types, vec!["museum".to_string()]);
        assert!(candidates[1].coordinate.is_none());
    }

    #[test]
    fn test_text_search_keeps_at_most_fifteen() {
        let results: Vec<_> = (0..20)
            .map(|i| json!({ "place_id": format!("p{}", i), "name": "x" }))
            .collect();
        let body = json!({ "status": "OK", "results": results }).to_string();

        assert_eq!(parse_text_search(&body).unwrap().len(), MAX_RESULTS_PER_QUERY);
    }

    #[test]
    fn test_text_search_malformed_body() {
        assert!(matches!(
            parse_text_search("<html>"),
            Err(PlacesError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_place_details_maps_fields() {
        let body = json!({
            "status": "OK",
            "result": {
                "name": "Le Comptoir",
                "rating": 4.4,
                "user_ratings_total": 1520,
                "formatted_address": "9 Carrefour de l'Odeon, Paris",
                "formatted_phone_number": "01 44 27 07 97",
                "opening_hours": { "weekday_text": ["Monday: 12:00 - 23:00"] },
                "price_level": 3,
                "photos": [{ "photo_reference": "ref1" }, {}],
                "reviews": [{ "author_name": "Ann", "rating": 5, "text": "Great", "relative_time_description": "a week ago" }, {}],
                "types": ["restaurant", "food"],
                "geometry": { "location": { "lat": 48.85, "lng": 2.33 } }
            }
        })
        .to_string();

        let details = parse_place_details(&body, |r| format!("photo:{}", r)).unwrap();
        assert_eq!(details.name.as_deref(), Some("Le Comptoir"));
        assert_eq!(details.website, None);
        assert_eq!(details.price_level, Some(3));
        assert_eq!(details.photos, vec!["photo:ref1".to_string()]);
        assert_eq!(details.reviews.len(), 2);
        assert_eq!(details.reviews[1].author, "Anonymous");
        assert_eq!(details.opening_hours.len(), 1);
    }

    #[test]
    fn test_place_details_not_found_status() {
        let body = json!({ "status": "NOT_FOUND" }).to_string();
        assert!(parse_place_details(&body, |_| String::new()).is_err());
    }

    #[test]
    fn test_photo_url_carries_reference_and_key() {
        let endpoint = Url::parse("https://maps.googleapis.com/maps/api/place/photo").unwrap();
        let url = photo_url(&endpoint, "abc", "secret");
        assert!(url.starts_with("https://maps.googleapis.com/maps/api/place/photo?"));
        assert!(url.contains("maxwidth=800"));
        assert!(url.contains("photoreference=abc"));
        assert!(url.contains("key=secret"));
    }

    fn query_map(url: &Url) -> std::collections::HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    fn base(path: &str) -> Url {
        Url::parse(&format!("{}{}", DEFAULT_BASE_URL, path)).unwrap()
    }

    #[test]
    fn test_geocode_url_sends_address_and_key() {
        let url = geocode_url(base("/maps/api/geocode/json"), "Paris, France", "secret");
        let query = query_map(&url);

        assert_eq!(url.path(), "/maps/api/geocode/json");
        assert_eq!(query["address"], "Paris, France");
        assert_eq!(query["key"], "secret");
    }

    #[test]
    fn test_anchored_text_search_url_sends_location_and_radius() {
        let search = SearchQuery::new("museums in Paris")
            .anchored(Coordinate::new(48.8566, 2.3522), 10_000);
        let url = text_search_url(base("/maps/api/place/textsearch/json"), &search, "secret");
        let query = query_map(&url);

        assert_eq!(query["query"], "museums in Paris");
        assert_eq!(query["location"], "48.8566,2.3522");
        assert_eq!(query["radius"], "10000");
        assert_eq!(query["key"], "secret");
    }

    #[test]
    fn test_unanchored_text_search_url_omits_location() {
        let search = SearchQuery::new("things to do in Paris");
        let url = text_search_url(base("/maps/api/place/textsearch/json"), &search, "secret");
        let query = query_map(&url);

        assert_eq!(query["query"], "things to do in Paris");
        assert!(!query.contains_key("location"));
        assert!(!query.contains_key("radius"));
        assert_eq!(query["key"], "secret");
    }

    #[test]
    fn test_details_url_sends_place_id_and_fields() {
        let url = details_url(base("/maps/api/place/details/json"), "ChIJ123", "secret");
        let query = query_map(&url);

        assert_eq!(url.path(), "/maps/api/place/details/json");
        assert_eq!(query["place_id"], "ChIJ123");
        assert_eq!(query["fields"], DETAIL_FIELDS);
        assert!(query["fields"].contains("price_level"));
        assert_eq!(query["key"], "secret");
    }
}
