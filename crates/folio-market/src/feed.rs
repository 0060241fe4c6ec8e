//! Loading state for one widget's data.
//!
//! Each fetch is a ticketed request:
//!
//! ```text
//! begin()  ──► loading = true, generation += 1, ticket(generation)
//!   ... await source ...
//! complete(ticket, result)
//!   ├── ticket stale   → dropped, nothing changes
//!   ├── Ok(data)       → data replaced, error cleared, loading = false
//!   └── Err(e)         → data kept, error set, loading = false
//! ```
//!
//! Only the newest request can land, so when fetches overlap the most
//! recently *started* one wins regardless of resolution order.

use tracing::{error, warn};

use crate::Result;

/// Handle for one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What [`Feed::complete`] did with a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// A newer request was started; the result was discarded.
    Stale,
}

#[derive(Clone, Debug)]
pub struct Feed<T> {
    data: T,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Feed<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed request, until the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a request. Any earlier ticket becomes stale.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Apply exactly one update for `ticket`.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T>) -> Completion {
        if ticket.0 != self.generation {
            warn!(
                ticket = ticket.0,
                current = self.generation,
                "dropping stale fetch result"
            );
            return Completion::Stale;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
                Completion::Applied
            }
            Err(e) => {
                error!(error = %e, "market fetch failed");
                self.error = Some(e.to_string());
                Completion::Failed
            }
        }
    }

    /// Replace the data outside the request cycle. Any ticket still in
    /// flight becomes stale.
    pub fn set(&mut self, data: T) {
        self.generation += 1;
        self.loading = false;
        self.data = data;
        self.error = None;
    }
}

impl<T: Default> Default for Feed<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarketError;

    #[test]
    fn test_success_cycle() {
        let mut feed = Feed::new(vec![1]);
        let t = feed.begin();
        assert!(feed.loading());
        assert_eq!(feed.complete(t, Ok(vec![2, 3])), Completion::Applied);
        assert!(!feed.loading());
        assert_eq!(feed.data(), &vec![2, 3]);
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut feed = Feed::new(vec![1]);
        let t = feed.begin();
        let outcome = feed.complete(t, Err(MarketError::SourceUnavailable("timeout".into())));
        assert_eq!(outcome, Completion::Failed);
        assert!(!feed.loading());
        assert_eq!(feed.data(), &vec![1]);
        assert_eq!(feed.error(), Some("market source unavailable: timeout"));

        let t = feed.begin();
        feed.complete(t, Ok(vec![4]));
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn test_newest_request_wins_out_of_order() {
        let mut feed: Feed<Vec<u8>> = Feed::default();
        let first = feed.begin();
        let second = feed.begin();

        assert_eq!(feed.complete(second, Ok(vec![2])), Completion::Applied);
        assert_eq!(feed.complete(first, Ok(vec![1])), Completion::Stale);
        assert_eq!(feed.data(), &vec![2]);
        assert!(!feed.loading());
    }

    #[test]
    fn test_set_supersedes_in_flight_request() {
        let mut feed = Feed::new(vec![1]);
        let t = feed.begin();
        feed.set(Vec::new());
        assert!(!feed.loading());
        assert_eq!(feed.complete(t, Ok(vec![9])), Completion::Stale);
        assert!(feed.data().is_empty());
    }

    #[test]
    fn test_stale_result_does_not_clear_loading() {
        let mut feed: Feed<Vec<u8>> = Feed::default();
        let first = feed.begin();
        let _second = feed.begin();
        assert_eq!(feed.complete(first, Ok(vec![1])), Completion::Stale);
        assert!(feed.loading());
        assert!(feed.data().is_empty());
    }
}
