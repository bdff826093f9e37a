use std::error::Error;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::models::{
    location::ResolvedLocation,
    place::{Candidate, PlaceDetails},
    search::SearchQuery,
};

#[derive(Debug)]
pub enum PlacesError {
    HttpError(reqwest::Error),
    StatusError(String),
    MalformedResponse(String),
    DeadlineExceeded,
    ConfigurationError(String),
}

impl fmt::Display for PlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacesError::HttpError(err) => write!(f, "HTTP error: {}", err),
            PlacesError::StatusError(status) => write!(f, "Provider returned status {}", status),
            PlacesError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            PlacesError::DeadlineExceeded => write!(f, "Request deadline exceeded"),
            PlacesError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for PlacesError {}

impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        PlacesError::HttpError(err)
    }
}

/// The three place lookups the itinerary pipeline depends on.
///
/// Implementations make exactly one remote call per method invocation and
/// never retry.
pub trait PlacesProvider {
    /// `Ok(None)` means the provider answered but knows no such place.
    async fn geocode(&self, address: &str) -> Result<Option<ResolvedLocation>, PlacesError>;

    async fn text_search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, PlacesError>;

    async fn place_details(&self, identity_key: &str) -> Result<PlaceDetails, PlacesError>;
}

/// Upper bound on wall-clock time for one itinerary assembly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn after(duration: Duration) -> Self {
        Self(Some(Instant::now() + duration))
    }

    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.0, Some(at) if Instant::now() >= at)
    }

    /// Run a provider call, failing it with `DeadlineExceeded` if it would
    /// outlive the deadline.
    pub async fn run<T, F>(&self, call: F) -> Result<T, PlacesError>
    where
        F: Future<Output = Result<T, PlacesError>>,
    {
        match self.0 {
            None => call.await,
            Some(_) if self.is_expired() => Err(PlacesError::DeadlineExceeded),
            Some(at) => tokio::time::timeout_at(at, call)
                .await
                .unwrap_or(Err(PlacesError::DeadlineExceeded)),
        }
    }
}
