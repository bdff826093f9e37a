use crate::models::{itinerary::PricedRestaurant, place::EnrichedPlace};

pub const UNKNOWN_PRICE: &str = "N/A";

pub struct PricingService;

impl PricingService {
    /// Display symbol for a provider price tier. Anything outside 1-4 is unknown.
    pub fn price_symbol(price_tier: Option<i64>) -> &'static str {
        match price_tier {
            Some(1) => "$",
            Some(2) => "$$",
            Some(3) => "$$$",
            Some(4) => "$$$$",
            _ => UNKNOWN_PRICE,
        }
    }

    pub fn price_restaurant(place: EnrichedPlace) -> PricedRestaurant {
        let price_symbol = Self::price_symbol(place.price_tier).to_string();
        PricedRestaurant {
            place,
            price_symbol,
        }
    }
}
