use log::{info, warn};

use crate::models::location::ResolvedLocation;
use crate::services::itinerary_generation_service::ItineraryError;
use crate::services::places_provider::{Deadline, PlacesProvider};

/// Resolve a free-text place name to a coordinate and formatted address.
///
/// One geocode call, no retry. A provider error, an empty answer and a
/// missed deadline all collapse into `ResolutionFailed`.
pub async fn resolve_location<P: PlacesProvider>(
    provider: &P,
    place_name: &str,
    deadline: Deadline,
) -> Result<ResolvedLocation, ItineraryError> {
    let place_name = place_name.trim();
    if place_name.is_empty() {
        return Err(ItineraryError::ResolutionFailed {
            query: String::new(),
        });
    }

    match deadline.run(provider.geocode(place_name)).await {
        Ok(Some(location)) => {
            info!(
                "Resolved '{}' to {} ({:.4}, {:.4})",
                place_name, location.formatted_address, location.lat, location.lng
            );
            Ok(location)
        }
        Ok(None) => {
            warn!("Geocoder has no match for '{}'", place_name);
            Err(ItineraryError::ResolutionFailed {
                query: place_name.to_string(),
            })
        }
        Err(e) => {
            warn!("Geocoding '{}' failed: {}", place_name, e);
            Err(ItineraryError::ResolutionFailed {
                query: place_name.to_string(),
            })
        }
    }
}
