use futures::stream::{self, StreamExt};
use log::{info, warn};

use crate::models::place::{Candidate, EnrichedPlace, PlaceDetails};
use crate::services::places_provider::{Deadline, PlacesProvider};

pub const MAX_PHOTOS: usize = 3;
pub const MAX_REVIEWS: usize = 5;

/// Merge a details answer into its candidate. Detail values win over the
/// search hit's; a place that ends up with no name is unusable.
pub fn merge_details(candidate: Candidate, details: PlaceDetails) -> Option<EnrichedPlace> {
    let name = details
        .name
        .filter(|name| !name.trim().is_empty())
        .or_else(|| Some(candidate.name).filter(|name| !name.trim().is_empty()))?;

    let mut photos = details.photos;
    photos.truncate(MAX_PHOTOS);
    let mut reviews = details.reviews;
    reviews.truncate(MAX_REVIEWS);

    let raw_types = if details.types.is_empty() {
        candidate.raw_types
    } else {
        details.types
    };

    Some(EnrichedPlace {
        identity_key: candidate.identity_key,
        name,
        raw_types,
        rating: details.rating.or(candidate.rating),
        formatted_address: details
            .formatted_address
            .unwrap_or(candidate.formatted_address),
        coordinate: details.coordinate.or(candidate.coordinate),
        phone: details.phone,
        website: details.website,
        opening_hours: details.opening_hours,
        photos,
        reviews,
        price_tier: details.price_level,
        user_ratings_total: details.user_ratings_total.unwrap_or(0),
    })
}

/// Fetch details for every candidate with at most `workers` calls in flight.
///
/// Results land in a slot per input index, so the output keeps candidate
/// order no matter which call finishes first. Failed or unusable entries are
/// dropped.
pub async fn enrich_candidates<P: PlacesProvider>(
    provider: &P,
    candidates: Vec<Candidate>,
    workers: usize,
    deadline: Deadline,
) -> Vec<EnrichedPlace> {
    let total = candidates.len();
    let mut slots: Vec<Option<EnrichedPlace>> = (0..total).map(|_| None).collect();

    let mut fetches = stream::iter(candidates.into_iter().enumerate())
        .map(move |(index, candidate)| async move {
            let result = deadline
                .run(provider.place_details(&candidate.identity_key))
                .await;
            (index, candidate, result)
        })
        .buffer_unordered(workers.max(1));

    while let Some((index, candidate, result)) = fetches.next().await {
        let identity_key = candidate.identity_key.clone();
        match result {
            Ok(details) => match merge_details(candidate, details) {
                Some(place) => slots[index] = Some(place),
                None => warn!("Details for {} have no name, dropping", identity_key),
            },
            Err(e) => warn!("Details for {} failed, dropping: {}", identity_key, e),
        }
    }

    let enriched: Vec<EnrichedPlace> = slots.into_iter().flatten().collect();
    info!("Enriched {} of {} candidates", enriched.len(), total);
    enriched
}
