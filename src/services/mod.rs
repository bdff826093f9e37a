pub mod candidate_collector;
pub mod categorizer;
pub mod day_allocator;
pub mod detail_enricher;
pub mod duration_service;
pub mod google_maps_service;
pub mod itinerary_generation_service;
pub mod location_service;
pub mod places_provider;
pub mod pricing_service;
pub mod query_planner;
