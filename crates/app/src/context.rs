//! App Context
//!
//! The explicit session/context object handed to the HTTP layer in place of
//! global mutable state.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::listings::{ListingsService, PgListingsService},
};

/// Errors raised while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database connection could not be established.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Shared application services.
#[derive(Clone)]
pub struct AppContext {
    /// The listing store.
    pub listings: Arc<dyn ListingsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            listings: Arc::new(PgListingsService::new(pool)),
        })
    }
}
