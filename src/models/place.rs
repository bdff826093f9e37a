use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// "lat,lng" as the Places API expects it
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// A text search hit that has not been enriched yet.
///
/// `identity_key` is the provider's place id. It is only ever compared for
/// equality, never parsed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Candidate {
    pub identity_key: String,
    pub name: String,
    pub raw_types: Vec<String>,
    pub rating: Option<f32>,
    pub formatted_address: String,
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub relative_time: String,
}

/// Attributes returned by a place details call. Every field is optional
/// because the provider omits whatever it does not know.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub rating: Option<f32>,
    pub user_ratings_total: Option<u32>,
    pub formatted_address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Vec<String>,
    pub price_level: Option<i64>,
    pub photos: Vec<String>,
    pub reviews: Vec<Review>,
    pub types: Vec<String>,
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EnrichedPlace {
    pub identity_key: String,
    pub name: String,
    pub raw_types: Vec<String>,
    pub rating: Option<f32>,
    pub formatted_address: String,
    pub coordinate: Option<Coordinate>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Vec<String>,
    pub photos: Vec<String>,
    pub reviews: Vec<Review>,
    pub price_tier: Option<i64>,
    pub user_ratings_total: u32,
}
