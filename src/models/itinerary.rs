use serde::{Deserialize, Deserializer, Serialize};

use super::place::EnrichedPlace;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sightseeing,
    History,
    Nature,
    Food,
    Shopping,
    Nightlife,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CategorizedAttraction {
    #[serde(flatten)]
    pub place: EnrichedPlace,
    pub category: Category,
    pub description: String,
    pub duration: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PricedRestaurant {
    #[serde(flatten)]
    pub place: EnrichedPlace,
    pub price_symbol: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DaySlice {
    pub day_number: u32,
    pub date_label: String,
    pub activities: Vec<CategorizedAttraction>,
    pub restaurants: Vec<PricedRestaurant>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub city: String,
    pub duration_days: u32,
    pub total_attractions: usize,
    pub total_restaurants: usize,
    pub selected_interests: Vec<String>,
    pub days: Vec<DaySlice>,
    pub tips: Vec<String>,
}

/// Input to itinerary assembly. Dates are kept as the caller sent them;
/// parsing happens in the duration estimator.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItineraryRequest {
    #[serde(default)]
    pub city: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub interests: Vec<String>,
}

// Clients send `"interests": null` when nothing is ticked
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
