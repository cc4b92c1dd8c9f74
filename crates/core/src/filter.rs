//! Listing Filter Engine
//!
//! Given the full listing set and a filter spec, produces the visible subset
//! deterministically. Input order is preserved; filtering never reorders.

use serde::{Deserialize, Serialize};

use crate::listings::{Listing, ListingStatus};

/// Sentinel matching every location or category.
pub const ALL: &str = "All";

/// User-selected criteria narrowing the visible listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// State to match, or [`ALL`].
    pub location: String,

    /// Category to match, or [`ALL`].
    pub category: String,

    /// Case-insensitive substring matched against title and description;
    /// empty means no search constraint.
    pub search: String,

    /// When set, hide listings already marked sold.
    pub active_only: bool,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            location: ALL.to_string(),
            category: ALL.to_string(),
            search: String::new(),
            active_only: false,
        }
    }
}

impl FilterSpec {
    /// Returns whether a single listing is visible under this spec.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let status = !self.active_only || listing.status == ListingStatus::Active;
        let location = self.location == ALL || listing.state == self.location;
        let category = self.category == ALL || listing.category == self.category;

        status && location && category && self.matches_search(listing)
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();

        listing.title.to_lowercase().contains(&term)
            || listing
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&term))
    }
}

/// Returns the listings visible under `spec`, preserving input order.
///
/// An empty result is valid, not an error.
#[must_use]
pub fn filter<'a>(listings: &'a [Listing], spec: &FilterSpec) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| spec.matches(listing))
        .collect()
}
