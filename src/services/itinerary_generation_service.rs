use std::error::Error;
use std::fmt;
use std::time::Duration;

use log::info;

use crate::models::{
    itinerary::{CategorizedAttraction, DaySlice, Itinerary, ItineraryRequest, PricedRestaurant},
    location::ResolvedLocation,
    place::EnrichedPlace,
    search::QueryKind,
};
use crate::services::candidate_collector::CandidateCollector;
use crate::services::categorizer::categorize;
use crate::services::day_allocator::allocate_days;
use crate::services::detail_enricher::enrich_candidates;
use crate::services::duration_service::{estimate_duration, DEFAULT_DURATION_DAYS};
use crate::services::location_service::resolve_location;
use crate::services::places_provider::{Deadline, PlacesProvider};
use crate::services::pricing_service::PricingService;
use crate::services::query_planner::{normalize_interests, plan_queries};

const MAX_ATTRACTIONS: usize = 12;
const MAX_RESTAURANTS: usize = 6;
const ENRICHMENT_WORKERS: usize = 4;
const SEARCH_RADIUS_METERS: u32 = 10_000;
const REQUEST_DEADLINE_SECS: u64 = 60;
const MAX_DURATION_DAYS: u32 = 30;
const ATTRACTION_DURATION_LABEL: &str = "2h";

pub const TRAVEL_TIPS: &[&str] = &[
    "Arrive early at popular attractions to avoid crowds",
    "Download offline maps before your trip",
    "Ask locals for restaurant recommendations",
    "Respect local customs and photography rules",
    "Use public transportation to save money",
    "Visit museums on free admission days",
    "Try street food for authentic local cuisine",
    "Keep some cash for small vendors",
];

#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryError {
    ResolutionFailed { query: String },
}

impl fmt::Display for ItineraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItineraryError::ResolutionFailed { query } => {
                write!(f, "Could not find city: {}", query)
            }
        }
    }
}

impl Error for ItineraryError {}

#[derive(Debug, Clone)]
pub struct ItineraryGenerationConfig {
    pub max_attractions: usize,
    pub max_restaurants: usize,
    pub attraction_query_cap: usize,
    pub restaurant_query_cap: usize,
    pub enrichment_workers: usize,
    pub default_duration_days: u32,
    pub max_duration_days: u32,
    pub search_radius_meters: u32,
    pub request_deadline_secs: u64,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            max_attractions: MAX_ATTRACTIONS,
            max_restaurants: MAX_RESTAURANTS,
            attraction_query_cap: QueryKind::Attractions.default_query_cap(),
            restaurant_query_cap: QueryKind::Restaurants.default_query_cap(),
            enrichment_workers: ENRICHMENT_WORKERS,
            default_duration_days: DEFAULT_DURATION_DAYS,
            max_duration_days: MAX_DURATION_DAYS,
            search_radius_meters: SEARCH_RADIUS_METERS,
            request_deadline_secs: REQUEST_DEADLINE_SECS,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl ItineraryGenerationConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_attractions: env_or("ITINERARY_MAX_ATTRACTIONS", defaults.max_attractions),
            max_restaurants: env_or("ITINERARY_MAX_RESTAURANTS", defaults.max_restaurants),
            enrichment_workers: env_or(
                "ITINERARY_ENRICHMENT_WORKERS",
                defaults.enrichment_workers,
            )
            .max(1),
            max_duration_days: env_or("ITINERARY_MAX_DURATION_DAYS", defaults.max_duration_days)
                .max(1),
            search_radius_meters: env_or(
                "ITINERARY_SEARCH_RADIUS_METERS",
                defaults.search_radius_meters,
            ),
            request_deadline_secs: env_or(
                "ITINERARY_REQUEST_DEADLINE_SECS",
                defaults.request_deadline_secs,
            ),
            ..defaults
        }
    }

    pub fn request_deadline(&self) -> Deadline {
        Deadline::after(Duration::from_secs(self.request_deadline_secs))
    }
}

fn categorize_attraction(place: EnrichedPlace) -> CategorizedAttraction {
    let category = categorize(&place.raw_types);
    let description = format!(
        "Popular attraction with {} reviews",
        place.user_ratings_total
    );
    CategorizedAttraction {
        place,
        category,
        description,
        duration: ATTRACTION_DURATION_LABEL.to_string(),
    }
}

/// Assemble the final itinerary from already collected lists. Pure; cannot
/// fail.
pub fn compose_itinerary(
    city: &str,
    start_date: Option<&str>,
    duration_days: u32,
    selected_interests: Vec<String>,
    attractions: Vec<CategorizedAttraction>,
    restaurants: Vec<PricedRestaurant>,
) -> Itinerary {
    let start_label = start_date
        .map(str::trim)
        .filter(|date| !date.is_empty());

    let days = allocate_days(&attractions, &restaurants, duration_days)
        .into_iter()
        .map(|day| DaySlice {
            day_number: day.day_number,
            date_label: start_label
                .map(str::to_string)
                .unwrap_or_else(|| format!("Day {}", day.day_number)),
            activities: day.activities,
            restaurants: day.restaurants,
        })
        .collect::<Vec<_>>();

    Itinerary {
        city: city.to_string(),
        duration_days: days.len() as u32,
        total_attractions: attractions.len(),
        total_restaurants: restaurants.len(),
        selected_interests,
        days,
        tips: TRAVEL_TIPS.iter().map(|tip| tip.to_string()).collect(),
    }
}

pub struct ItineraryGenerator<P: PlacesProvider> {
    provider: P,
    config: ItineraryGenerationConfig,
}

impl<P: PlacesProvider> ItineraryGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ItineraryGenerationConfig::default())
    }

    pub fn with_config(provider: P, config: ItineraryGenerationConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ItineraryGenerationConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn resolve_location(
        &self,
        place_name: &str,
        deadline: Deadline,
    ) -> Result<ResolvedLocation, ItineraryError> {
        resolve_location(&self.provider, place_name, deadline).await
    }

    /// Build a full itinerary for a city. Only a failed city lookup is an
    /// error; every other provider failure just shrinks the lists.
    pub async fn generate_itinerary(
        &self,
        request: &ItineraryRequest,
        deadline: Deadline,
    ) -> Result<Itinerary, ItineraryError> {
        let city = request.city.trim();
        info!("Generating itinerary for {}", city);

        let location = self.resolve_location(city, deadline).await?;
        let interests = normalize_interests(&request.interests);

        let mut collector = CandidateCollector::new();
        let attractions = self
            .collect_attractions(&mut collector, city, &interests, &location, deadline)
            .await;
        let restaurants = self
            .collect_restaurants(&mut collector, city, &location, deadline)
            .await;

        let duration_days = estimate_duration(
            request.start_date.as_deref(),
            request.end_date.as_deref(),
            self.config.default_duration_days,
        );

        let itinerary = compose_itinerary(
            city,
            request.start_date.as_deref(),
            duration_days,
            interests,
            attractions,
            restaurants,
        );

        info!(
            "Generated itinerary: {} days, {} attractions, {} restaurants",
            itinerary.duration_days, itinerary.total_attractions, itinerary.total_restaurants
        );
        Ok(itinerary)
    }

    /// Attractions for a city on their own, without day allocation.
    pub async fn search_attractions(
        &self,
        city: &str,
        interests: &[String],
        deadline: Deadline,
    ) -> Result<Vec<CategorizedAttraction>, ItineraryError> {
        let city = city.trim();
        let location = self.resolve_location(city, deadline).await?;
        let interests = normalize_interests(interests);
        let mut collector = CandidateCollector::new();

        let attractions = self
            .collect_attractions(&mut collector, city, &interests, &location, deadline)
            .await;
        info!("Found {} attractions for {}", attractions.len(), city);
        Ok(attractions)
    }

    pub async fn search_restaurants(
        &self,
        city: &str,
        deadline: Deadline,
    ) -> Result<Vec<PricedRestaurant>, ItineraryError> {
        let city = city.trim();
        let location = self.resolve_location(city, deadline).await?;
        let mut collector = CandidateCollector::new();

        let restaurants = self
            .collect_restaurants(&mut collector, city, &location, deadline)
            .await;
        info!("Found {} restaurants for {}", restaurants.len(), city);
        Ok(restaurants)
    }

    async fn collect_attractions(
        &self,
        collector: &mut CandidateCollector,
        city: &str,
        interests: &[String],
        location: &ResolvedLocation,
        deadline: Deadline,
    ) -> Vec<CategorizedAttraction> {
        let queries = plan_queries(
            QueryKind::Attractions,
            city,
            interests,
            self.config.attraction_query_cap,
            location.coordinate(),
            self.config.search_radius_meters,
        );
        let candidates = collector
            .collect(&self.provider, &queries, self.config.max_attractions, deadline)
            .await;

        enrich_candidates(
            &self.provider,
            candidates,
            self.config.enrichment_workers,
            deadline,
        )
        .await
        .into_iter()
        .map(categorize_attraction)
        .collect()
    }

    async fn collect_restaurants(
        &self,
        collector: &mut CandidateCollector,
        city: &str,
        location: &ResolvedLocation,
        deadline: Deadline,
    ) -> Vec<PricedRestaurant> {
        let queries = plan_queries(
            QueryKind::Restaurants,
            city,
            &[],
            self.config.restaurant_query_cap,
            location.coordinate(),
            self.config.search_radius_meters,
        );
        let candidates = collector
            .collect(&self.provider, &queries, self.config.max_restaurants, deadline)
            .await;

        enrich_candidates(
            &self.provider,
            candidates,
            self.config.enrichment_workers,
            deadline,
        )
        .await
        .into_iter()
        .map(PricingService::price_restaurant)
        .collect()
    }
}
