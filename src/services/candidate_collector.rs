use std::collections::HashSet;

use log::{debug, warn};

use crate::models::{place::Candidate, search::SearchQuery};
use crate::services::places_provider::{Deadline, PlacesProvider};

/// Gathers search hits for one itinerary assembly.
///
/// The seen-set spans every `collect` call made on the same collector, so an
/// attraction can never reappear as a restaurant in the same assembly.
#[derive(Debug, Default)]
pub struct CandidateCollector {
    seen: HashSet<String>,
}

impl CandidateCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Run the queries in order until `cap` unique candidates are held.
    ///
    /// Queries are issued one at a time because the stop condition depends on
    /// the running count. A failed query contributes nothing and the next one
    /// still runs.
    pub async fn collect<P: PlacesProvider>(
        &mut self,
        provider: &P,
        queries: &[SearchQuery],
        cap: usize,
        deadline: Deadline,
    ) -> Vec<Candidate> {
        let mut collected = Vec::new();

        for query in queries {
            if collected.len() >= cap {
                break;
            }

            let results = match deadline.run(provider.text_search(query)).await {
                Ok(results) => results,
                Err(e) => {
                    warn!("Search '{}' failed, skipping: {}", query.text, e);
                    continue;
                }
            };

            let before = collected.len();
            self.absorb(results, &mut collected, cap);
            debug!(
                "Search '{}' added {} candidates ({} total)",
                query.text,
                collected.len() - before,
                collected.len()
            );
        }

        collected
    }

    /// Append unseen results in order, stopping the instant `cap` is reached.
    fn absorb(&mut self, results: Vec<Candidate>, collected: &mut Vec<Candidate>, cap: usize) {
        for candidate in results {
            if collected.len() >= cap {
                break;
            }
            if self.seen.insert(candidate.identity_key.clone()) {
                collected.push(candidate);
            }
        }
    }
}
