//! Listings Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use nearsell_core::listings::{Listing, ListingStatus, ListingUuid};

use crate::domain::listings::data::NewListing;

const CREATE_LISTING_SQL: &str = include_str!("sql/create_listing.sql");
const LIST_LISTINGS_SQL: &str = include_str!("sql/list_listings.sql");
const LIST_LISTINGS_BY_OWNER_SQL: &str = include_str!("sql/list_listings_by_owner.sql");
const UPDATE_LISTING_STATUS_SQL: &str = include_str!("sql/update_listing_status.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgListingsRepository {
    pool: PgPool,
}

impl PgListingsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_listing(
        &self,
        uuid: ListingUuid,
        price: i64,
        listing: &NewListing,
    ) -> Result<Listing, sqlx::Error> {
        query_as::<Postgres, ListingRow>(CREATE_LISTING_SQL)
            .bind(uuid.into_uuid())
            .bind(&listing.title)
            .bind(listing.description.as_deref())
            .bind(price)
            .bind(&listing.category)
            .bind(&listing.state)
            .bind(&listing.city)
            .bind(listing.seller_name.as_deref())
            .bind(&listing.seller_contact)
            .bind(&listing.images)
            .fetch_one(&self.pool)
            .await
            .map(ListingRow::into_listing)
    }

    pub(crate) async fn list_listings(&self) -> Result<Vec<Listing>, sqlx::Error> {
        let rows = query_as::<Postgres, ListingRow>(LIST_LISTINGS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    pub(crate) async fn list_listings_by_owner(
        &self,
        contact: &str,
    ) -> Result<Vec<Listing>, sqlx::Error> {
        let rows = query_as::<Postgres, ListingRow>(LIST_LISTINGS_BY_OWNER_SQL)
            .bind(contact)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    pub(crate) async fn update_listing_status(
        &self,
        listing: ListingUuid,
        status: ListingStatus,
    ) -> Result<Listing, sqlx::Error> {
        query_as::<Postgres, ListingRow>(UPDATE_LISTING_STATUS_SQL)
            .bind(listing.into_uuid())
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map(ListingRow::into_listing)
    }
}

/// Row wrapper so the shared wire model can be decoded without the core
/// crate knowing about `sqlx`.
struct ListingRow(Listing);

impl ListingRow {
    fn into_listing(self) -> Listing {
        self.0
    }
}

impl<'r> FromRow<'r, PgRow> for ListingRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        let status: String = row.try_get("status")?;

        let status = status
            .parse::<ListingStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self(Listing {
            uuid: ListingUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            price,
            category: row.try_get("category")?,
            state: row.try_get("state")?,
            city: row.try_get("city")?,
            seller_name: row.try_get("seller_name")?,
            seller_contact: row.try_get("seller_contact")?,
            status,
            images: row.try_get("images")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        }))
    }
}
