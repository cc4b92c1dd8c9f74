//! Create Listing Handler

use salvo::{oapi::ToSchema, oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use nearsell_app::domain::listings::NewListing;

use crate::{
    listings::{errors::into_status_error, handlers::index::ListingResponse},
    state::State,
};

/// Payload for posting a new listing.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateListingRequest {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub price: u64,

    pub category: String,

    pub state: String,

    pub city: String,

    #[serde(default)]
    pub seller_name: Option<String>,

    pub seller_contact: String,

    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreateListingRequest> for NewListing {
    fn from(request: CreateListingRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            category: request.category,
            state: request.state,
            city: request.city,
            seller_name: request.seller_name,
            seller_contact: request.seller_contact,
            images: request.images,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ListingCreatedResponse {
    pub message: String,
    pub item: ListingResponse,
}

/// Create Listing Handler
#[endpoint(tags("items"), summary = "Post Item", status_codes(200, 400, 500))]
pub(crate) async fn handler(
    depot: &mut Depot,
    request: JsonBody<CreateListingRequest>,
) -> Result<Json<ListingCreatedResponse>, StatusError> {
    let state = State::from_depot(depot)?;

    let listing = state
        .app
        .listings
        .create_listing(request.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(uuid = %listing.uuid, title = %listing.title, "listing created");

    Ok(Json(ListingCreatedResponse {
        message: "Item posted successfully".to_owned(),
        item: listing.into(),
    }))
}
