use serde::{Deserialize, Serialize};

use super::place::Coordinate;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
}

impl ResolvedLocation {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}
