use serde::{Deserialize, Serialize};

use super::place::Coordinate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Attractions,
    Restaurants,
}

impl QueryKind {
    /// Hard cap on the number of queries issued for this kind of search
    pub fn default_query_cap(&self) -> usize {
        match self {
            QueryKind::Attractions => 5,
            QueryKind::Restaurants => 2,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub anchor: Option<Coordinate>,
    pub radius_meters: Option<u32>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor: None,
            radius_meters: None,
        }
    }

    pub fn anchored(mut self, anchor: Coordinate, radius_meters: u32) -> Self {
        self.anchor = Some(anchor);
        self.radius_meters = Some(radius_meters);
        self
    }
}
