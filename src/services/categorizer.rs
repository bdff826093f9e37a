use crate::models::itinerary::Category;

/// First-match rule table. Order is priority; do not reorder.
pub const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["museum", "art_gallery"], Category::History),
    (&["park", "natural_feature"], Category::Nature),
    (&["restaurant", "cafe", "food"], Category::Food),
    (&["shopping_mall", "store"], Category::Shopping),
    (&["night_club", "bar"], Category::Nightlife),
];

pub const DEFAULT_CATEGORY: Category = Category::Sightseeing;

pub fn categorize<S: AsRef<str>>(raw_types: &[S]) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(tags, _)| {
            raw_types
                .iter()
                .any(|raw| tags.contains(&raw.as_ref()))
        })
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}
