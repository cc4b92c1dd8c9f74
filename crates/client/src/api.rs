//! Marketplace API client.

use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use uuid::Uuid;

use nearsell_core::listings::{Listing, ListingStatus};

/// Errors raised while talking to the marketplace server.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request could not be sent or the response body was unreadable.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server rejected the request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

/// Payload for posting a new listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewItemRequest {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: u64,

    pub category: String,

    pub state: String,

    pub city: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,

    pub seller_contact: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemPostedResponse {
    pub message: String,
    pub item: Listing,
}

/// Thin HTTP wrapper around the marketplace endpoints.
#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetches every listing, newest first.
    pub(crate) async fn items(&self) -> Result<Vec<Listing>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/items", self.base_url))
            .send()
            .await?;

        parse(response).await
    }

    /// Fetches the listings posted under a seller contact.
    pub(crate) async fn user_listings(&self, contact: &str) -> Result<Vec<Listing>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/user/listings", self.base_url))
            .query(&[("sellerContact", contact)])
            .send()
            .await?;

        parse(response).await
    }

    /// Posts a new listing.
    pub(crate) async fn create_item(
        &self,
        item: &NewItemRequest,
    ) -> Result<ItemPostedResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/items", self.base_url))
            .json(item)
            .send()
            .await?;

        parse(response).await
    }

    /// Moves a listing between `active` and `sold`.
    pub(crate) async fn update_status(
        &self,
        uuid: Uuid,
        status: ListingStatus,
    ) -> Result<Listing, ApiError> {
        let response = self
            .http
            .patch(format!("{}/api/items/{uuid}", self.base_url))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;

        parse(response).await
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = response.text().await.unwrap_or_default();

    Err(ApiError::Rejected { status, message })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");

        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_new_item_request_serializes_camel_case() -> TestResult {
        let request = NewItemRequest {
            title: "Bike".to_string(),
            description: None,
            price: 1500,
            category: "Vehicles".to_string(),
            state: "Goa".to_string(),
            city: "Panaji".to_string(),
            seller_name: None,
            seller_contact: "+91 9876500000".to_string(),
            images: vec![],
        };

        let value = serde_json::to_value(&request)?;

        assert_eq!(value["sellerContact"], "+91 9876500000");
        assert!(
            value.get("description").is_none(),
            "unset optional fields must be omitted"
        );

        Ok(())
    }
}
