pub mod itinerary;
pub mod location;
pub mod place;
pub mod search;
