//! Update Listing Status Handler

use salvo::{
    oapi::ToSchema,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::Deserialize;
use uuid::Uuid;

use nearsell_core::listings::ListingStatus;

use crate::{
    listings::{errors::into_status_error, handlers::index::ListingResponse},
    state::State,
};

/// Payload for moving a listing between `active` and `sold`.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    pub status: String,
}

/// Update Listing Status Handler
#[endpoint(tags("items"), summary = "Update Item Status", status_codes(200, 400, 404, 500))]
pub(crate) async fn handler(
    depot: &mut Depot,
    uuid: PathParam<Uuid>,
    request: JsonBody<UpdateStatusRequest>,
) -> Result<Json<ListingResponse>, StatusError> {
    let state = State::from_depot(depot)?;

    let Ok(status) = request.status.parse::<ListingStatus>() else {
        return Err(StatusError::bad_request().brief("Invalid listing status"));
    };

    let listing = state
        .app
        .listings
        .update_listing_status(uuid.into_inner().into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(listing.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use nearsell_app::domain::listings::{ListingsServiceError, MockListingsService};
    use nearsell_core::listings::ListingUuid;

    use crate::test_helpers::{listings_service, make_listing};

    use super::*;

    fn make_service(listings: MockListingsService) -> Service {
        listings_service(
            listings,
            Router::with_path("api/items/{uuid}").patch(handler),
        )
    }

    #[tokio::test]
    async fn test_mark_sold_returns_updated_listing() -> TestResult {
        let uuid = ListingUuid::new();

        let mut listings = MockListingsService::new();

        listings
            .expect_update_listing_status()
            .withf(move |requested_uuid, status| {
                *requested_uuid == uuid && *status == ListingStatus::Sold
            })
            .once()
            .return_once(move |_, _| {
                let mut listing = make_listing(uuid);
                listing.status = ListingStatus::Sold;

                Ok(listing)
            });

        let mut res = TestClient::patch(format!("http://example.com/api/items/{uuid}"))
            .json(&json!({ "status": "sold" }))
            .send(&make_service(listings))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: ListingResponse = res.take_json().await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.status, "sold");

        Ok(())
    }

    #[tokio::test]
    async fn test_relist_returns_active_listing() -> TestResult {
        let uuid = ListingUuid::new();

        let mut listings = MockListingsService::new();

        listings
            .expect_update_listing_status()
            .withf(move |requested_uuid, status| {
                *requested_uuid == uuid && *status == ListingStatus::Active
            })
            .once()
            .return_once(move |_, _| Ok(make_listing(uuid)));

        let mut res = TestClient::patch(format!("http://example.com/api/items/{uuid}"))
            .json(&json!({ "status": "active" }))
            .send(&make_service(listings))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: ListingResponse = res.take_json().await?;

        assert_eq!(response.status, "active");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_listing_returns_404() -> TestResult {
        let mut listings = MockListingsService::new();

        listings
            .expect_update_listing_status()
            .once()
            .return_once(|_, _| Err(ListingsServiceError::NotFound));

        let res = TestClient::patch(format!(
            "http://example.com/api/items/{}",
            ListingUuid::new()
        ))
        .json(&json!({ "status": "sold" }))
        .send(&make_service(listings))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_status_never_reaches_service() -> TestResult {
        let mut listings = MockListingsService::new();

        listings.expect_update_listing_status().never();

        let res = TestClient::patch(format!(
            "http://example.com/api/items/{}",
            ListingUuid::new()
        ))
        .json(&json!({ "status": "archived" }))
        .send(&make_service(listings))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
