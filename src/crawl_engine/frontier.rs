//! Crawl frontier: FIFO pending queue plus visited set.
//!
//! A URL may sit in the pending queue more than once, but it enters the
//! visited set at most once: `pop` discards entries that were visited
//! since they were enqueued. That makes fold-once trivial for the
//! orchestrator: every URL `pop` yields is seen for the first time.

use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Frontier {
    pending: VecDeque<String>,
    visited: HashSet<String>,
}

impl Frontier {
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        let mut frontier = Self::default();
        frontier.pending.push_back(seed.into());
        frontier
    }

    /// Enqueues a URL unless it has already been visited. Duplicates in the
    /// pending queue are allowed; `pop` filters them.
    pub fn push(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !self.visited.contains(&url) {
            self.pending.push_back(url);
        }
    }

    /// Dequeues the next unvisited URL and marks it visited. Already-visited
    /// entries are silently discarded.
    pub fn pop(&mut self) -> Option<String> {
        while let Some(url) = self.pending.pop_front() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
        }
        None
    }

    #[must_use]
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
