//! Owner Listings Handler

use salvo::prelude::*;

use crate::{
    listings::{errors::into_status_error, handlers::index::ListingResponse},
    state::State,
};

/// Owner Listings Handler
///
/// Returns the listings posted under a seller contact, newest first. The
/// contact is required; requests without it are rejected.
#[endpoint(tags("items"), summary = "List My Items", status_codes(200, 400, 500))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ListingResponse>>, StatusError> {
    let state = State::from_depot(depot)?;

    let contact = req
        .query::<String>("sellerContact")
        .filter(|contact| !contact.trim().is_empty())
        .ok_or_else(|| StatusError::bad_request().brief("Seller contact is required"))?;

    let listings = state
        .app
        .listings
        .list_listings_by_owner(&contact)
        .await
        .map_err(into_status_error)?;

    Ok(Json(listings.into_iter().map(Into::into).collect()))
}
