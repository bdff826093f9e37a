use crate::models::{
    place::Coordinate,
    search::{QueryKind, SearchQuery},
};

const GENERAL_ATTRACTION_TOPICS: &[&str] = &["tourist attractions", "things to do"];
const RESTAURANT_TOPICS: &[&str] = &["best restaurants", "top rated restaurants"];

/// Topic phrases searched for a recognised interest tag.
fn interest_topics(interest: &str) -> &'static [&'static str] {
    match interest {
        "culture" | "cultural" => &["cultural sites", "theaters"],
        "history" | "historical" | "historic" => &["historical sites", "monuments", "museums"],
        "art" | "arts" | "art galleries" => &["art galleries", "art museums"],
        "nature" | "outdoors" | "parks" => &["parks", "gardens", "nature reserves"],
        "food" | "foodie" | "cuisine" => &["food markets", "local food tours"],
        "shopping" | "shop" => &["shopping districts", "local markets"],
        "nightlife" | "night life" | "bars" => &["bars", "night clubs"],
        "adventure" | "outdoor activities" => &["outdoor activities", "hiking trails"],
        "architecture" | "landmarks" => &["landmarks", "famous architecture"],
        _ => &[],
    }
}

/// Interest tags exactly as they will be matched: trimmed, lowercased,
/// blanks removed, first occurrence kept.
pub fn normalize_interests(interests: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for interest in interests {
        let tag = interest.trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

/// Build the ordered, capped list of attraction queries for a city.
/// Unknown interests contribute nothing.
pub fn plan_attraction_queries(city: &str, interests: &[String], cap: usize) -> Vec<String> {
    let mut queries: Vec<String> = GENERAL_ATTRACTION_TOPICS
        .iter()
        .map(|topic| format!("{} in {}", topic, city))
        .collect();

    for interest in normalize_interests(interests) {
        for topic in interest_topics(&interest) {
            let query = format!("{} in {}", topic, city);
            if !queries.contains(&query) {
                queries.push(query);
            }
        }
    }

    queries.truncate(cap);
    queries
}

pub fn plan_restaurant_queries(city: &str, cap: usize) -> Vec<String> {
    let mut queries: Vec<String> = RESTAURANT_TOPICS
        .iter()
        .map(|topic| format!("{} in {}", topic, city))
        .collect();
    queries.truncate(cap);
    queries
}

/// Plan queries of the given kind and anchor each one at the resolved city
/// centre.
pub fn plan_queries(
    kind: QueryKind,
    city: &str,
    interests: &[String],
    cap: usize,
    anchor: Coordinate,
    radius_meters: u32,
) -> Vec<SearchQuery> {
    let texts = match kind {
        QueryKind::Attractions => plan_attraction_queries(city, interests, cap),
        QueryKind::Restaurants => plan_restaurant_queries(city, cap),
    };

    texts
        .into_iter()
        .map(|text| SearchQuery::new(text).anchored(anchor, radius_meters))
        .collect()
}
