//! Listing Records
//!
//! The wire model for a single classified ad, shared between the store, the
//! JSON API and the client. Field names on the wire are camelCase.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Listing UUID
pub type ListingUuid = TypedUuid<Listing>;

/// Lifecycle status of a listing. Listings are created active and toggle
/// between active and sold; they are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Visible and for sale.
    Active,

    /// Sold, kept for the seller's history.
    Sold,
}

impl ListingStatus {
    /// Returns the status as its wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Sold => "sold",
        }
    }
}

impl Display for ListingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is neither `active` nor `sold`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid listing status: {0}")]
pub struct InvalidListingStatus(String);

impl FromStr for ListingStatus {
    type Err = InvalidListingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "sold" => Ok(Self::Sold),
            other => Err(InvalidListingStatus(other.to_string())),
        }
    }
}

/// A single classified ad record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Identifier assigned by the store on create.
    pub uuid: ListingUuid,

    /// Listing title.
    pub title: String,

    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// Asking price in whole currency units; non-negative by construction.
    pub price: u64,

    /// Enum-like category string.
    pub category: String,

    /// Seller state, matched by the location filter.
    pub state: String,

    /// Seller city.
    pub city: String,

    /// Optional seller display name.
    #[serde(default)]
    pub seller_name: Option<String>,

    /// Phone-like string identifying the seller; the de facto account key.
    pub seller_contact: String,

    /// Lifecycle status.
    pub status: ListingStatus,

    /// Ordered image references.
    #[serde(default)]
    pub images: Vec<String>,

    /// Creation timestamp assigned by the store; immutable afterwards.
    pub created_at: Timestamp,
}
