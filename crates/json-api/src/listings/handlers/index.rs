//! Listing Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nearsell_core::listings::Listing;

use crate::{listings::errors::into_status_error, state::State};

/// A listing as returned on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListingResponse {
    /// The unique identifier of the listing
    pub uuid: Uuid,

    /// Listing title
    pub title: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Asking price in whole currency units
    pub price: u64,

    /// Listing category
    pub category: String,

    /// Seller state
    pub state: String,

    /// Seller city
    pub city: String,

    /// Optional seller display name
    pub seller_name: Option<String>,

    /// Seller contact, the de facto account key
    pub seller_contact: String,

    /// Lifecycle status (`active` or `sold`)
    pub status: String,

    /// Ordered image references
    pub images: Vec<String>,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            uuid: listing.uuid.into(),
            title: listing.title,
            description: listing.description,
            price: listing.price,
            category: listing.category,
            state: listing.state,
            city: listing.city,
            seller_name: listing.seller_name,
            seller_contact: listing.seller_contact,
            status: listing.status.to_string(),
            images: listing.images,
            created_at: listing.created_at.to_string(),
        }
    }
}

/// Listing Index Handler
///
/// Returns every listing, newest first.
#[endpoint(tags("items"), summary = "List Items")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ListingResponse>>, StatusError> {
    let state = State::from_depot(depot)?;

    let listings = state
        .app
        .listings
        .list_listings()
        .await
        .map_err(into_status_error)?;

    Ok(Json(listings.into_iter().map(Into::into).collect()))
}
