//! Listings service.
//!
//! Validates new listings at the store boundary, then delegates persistence
//! to the repository.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use nearsell_core::listings::{Listing, ListingStatus, ListingUuid};

use crate::domain::listings::{
    data::NewListing, errors::ListingsServiceError, repository::PgListingsRepository,
};

/// Maximum number of image references accepted per listing.
pub const MAX_IMAGES: usize = 10;

/// `PostgreSQL`-backed listing store.
#[derive(Debug, Clone)]
pub struct PgListingsService {
    repository: PgListingsRepository,
}

impl PgListingsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgListingsRepository::new(pool),
        }
    }
}

#[async_trait]
impl ListingsService for PgListingsService {
    async fn list_listings(&self) -> Result<Vec<Listing>, ListingsServiceError> {
        self.repository.list_listings().await.map_err(Into::into)
    }

    async fn list_listings_by_owner(
        &self,
        contact: &str,
    ) -> Result<Vec<Listing>, ListingsServiceError> {
        self.repository
            .list_listings_by_owner(contact)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(
        name = "listings.service.create_listing",
        skip(self, listing),
        fields(listing_uuid = tracing::field::Empty),
        err
    )]
    async fn create_listing(&self, listing: NewListing) -> Result<Listing, ListingsServiceError> {
        validate(&listing)?;

        let price = i64::try_from(listing.price)?;
        let uuid = ListingUuid::new();

        tracing::Span::current().record("listing_uuid", tracing::field::display(uuid));

        self.repository
            .create_listing(uuid, price, &listing)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(
        name = "listings.service.update_listing_status",
        skip(self),
        fields(listing_uuid = %listing, status = status.as_str()),
        err
    )]
    async fn update_listing_status(
        &self,
        listing: ListingUuid,
        status: ListingStatus,
    ) -> Result<Listing, ListingsServiceError> {
        self.repository
            .update_listing_status(listing, status)
            .await
            .map_err(Into::into)
    }
}

fn validate(listing: &NewListing) -> Result<(), ListingsServiceError> {
    let required = [
        &listing.title,
        &listing.state,
        &listing.city,
        &listing.seller_contact,
    ];

    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ListingsServiceError::MissingRequiredData);
    }

    if listing.images.len() > MAX_IMAGES {
        return Err(ListingsServiceError::InvalidData);
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait ListingsService: Send + Sync {
    /// Retrieves all listings, newest first.
    async fn list_listings(&self) -> Result<Vec<Listing>, ListingsServiceError>;

    /// Retrieves the listings owned by a seller contact, newest first.
    async fn list_listings_by_owner(
        &self,
        contact: &str,
    ) -> Result<Vec<Listing>, ListingsServiceError>;

    /// Validates and persists a new listing, assigning identifier and
    /// creation timestamp.
    async fn create_listing(&self, listing: NewListing) -> Result<Listing, ListingsServiceError>;

    /// Updates the status of an existing listing.
    async fn update_listing_status(
        &self,
        listing: ListingUuid,
        status: ListingStatus,
    ) -> Result<Listing, ListingsServiceError>;
}
