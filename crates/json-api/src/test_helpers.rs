//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use nearsell_app::{context::AppContext, domain::listings::MockListingsService};
use nearsell_core::listings::{Listing, ListingStatus, ListingUuid};

use crate::state::State;

pub(crate) fn make_listing(uuid: ListingUuid) -> Listing {
    Listing {
        uuid,
        title: "Bike".to_string(),
        description: Some("Hardly used".to_string()),
        price: 1500,
        category: "Vehicles".to_string(),
        state: "Goa".to_string(),
        city: "Panaji".to_string(),
        seller_name: Some("Asha".to_string()),
        seller_contact: "+91 9876500000".to_string(),
        status: ListingStatus::Active,
        images: vec![],
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_listings(listings: MockListingsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        listings: Arc::new(listings),
    }))
}

pub(crate) fn listings_service(listings: MockListingsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_listings(listings)))
            .push(route),
    )
}
