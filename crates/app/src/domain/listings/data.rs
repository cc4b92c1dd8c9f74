//! Listings Data

/// New Listing Data
///
/// The fields a seller supplies when posting; identifier, timestamp and
/// status are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    /// Listing title; required, must not be blank.
    pub title: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Asking price in whole currency units.
    pub price: u64,

    /// Enum-like category string.
    pub category: String,

    /// Seller state; required, must not be blank.
    pub state: String,

    /// Seller city; required, must not be blank.
    pub city: String,

    /// Optional seller display name.
    pub seller_name: Option<String>,

    /// Seller contact; required, must not be blank.
    pub seller_contact: String,

    /// Ordered image references, capped at [`crate::domain::listings::MAX_IMAGES`].
    pub images: Vec<String>,
}
