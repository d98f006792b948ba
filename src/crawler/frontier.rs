//! Frontier bookkeeping for the crawl
//!
//! This module owns the two URL sets of a crawl:
//! - `to_visit`: discovered URLs that have not been fetched yet
//! - `visited`: URLs that were fetched, extracted, and persisted
//!
//! A URL is in at most one of the two sets. It leaves `to_visit` exactly once,
//! either into `visited` or nowhere (discard).

use rand::Rng;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors raised by frontier bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontierError {
    /// The URL was not pending when the caller tried to remove it
    #[error("URL {0} not found in to_visit set")]
    NotPending(String),
}

/// To-visit and visited URL sets with random next-URL selection
///
/// Pending URLs live in a dense vector with a URL → slot index, so that a
/// random pick and its later removal are both O(1) (swap-remove).
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    /// Pending URLs, in slot order
    to_visit: Vec<String>,

    /// Slot of every pending URL in `to_visit`
    slots: HashMap<String, usize>,

    /// Visited URLs, in visit order
    visited: Vec<String>,

    /// Membership index for `visited`
    visited_set: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a starting URL into the to-visit set
    ///
    /// Seeding a URL that is already known has no effect.
    pub fn seed(&mut self, url: &str) {
        self.add_if_new(url);
    }

    /// Returns whether any URL is waiting to be fetched
    pub fn has_pending(&self) -> bool {
        !self.to_visit.is_empty()
    }

    /// Selects a pending URL uniformly at random
    ///
    /// The URL stays pending; the caller must remove it with
    /// [`mark_visited`](Self::mark_visited) or [`discard`](Self::discard)
    /// before picking again, otherwise it can be picked a second time.
    ///
    /// # Returns
    ///
    /// * `Some(String)` - The selected URL
    /// * `None` - Nothing is pending
    pub fn pick_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        if self.to_visit.is_empty() {
            return None;
        }

        let slot = rng.gen_range(0..self.to_visit.len());
        Some(self.to_visit[slot].clone())
    }

    /// Moves a pending URL into the visited set
    pub fn mark_visited(&mut self, url: &str) -> Result<(), FrontierError> {
        self.remove_pending(url)?;
        self.visited_set.insert(url.to_string());
        self.visited.push(url.to_string());
        Ok(())
    }

    /// Drops a pending URL without visiting it
    pub fn discard(&mut self, url: &str) -> Result<(), FrontierError> {
        self.remove_pending(url)
    }

    /// Adds a URL to the to-visit set unless it is already pending or visited
    ///
    /// # Returns
    ///
    /// `true` if the URL was newly added
    pub fn add_if_new(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) || self.visited_set.contains(url) {
            return false;
        }

        self.slots.insert(url.to_string(), self.to_visit.len());
        self.to_visit.push(url.to_string());
        true
    }

    /// Returns the number of pending URLs
    pub fn pending_count(&self) -> usize {
        self.to_visit.len()
    }

    /// Returns the number of visited URLs
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns whether the URL is pending
    pub fn is_pending(&self, url: &str) -> bool {
        self.slots.contains_key(url)
    }

    /// Returns whether the URL was visited
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited_set.contains(url)
    }

    /// Visited URLs in the order they were visited
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// Pending URLs, in no particular order
    pub fn pending(&self) -> &[String] {
        &self.to_visit
    }

    fn remove_pending(&mut self, url: &str) -> Result<(), FrontierError> {
        let slot = self
            .slots
            .remove(url)
            .ok_or_else(|| FrontierError::NotPending(url.to_string()))?;

        self.to_visit.swap_remove(slot);

        // The former last element now occupies `slot`
        if let Some(moved) = self.to_visit.get(slot) {
            if let Some(moved_slot) = self.slots.get_mut(moved) {
                *moved_slot = slot;
            }
        }

        Ok(())
    }
}
