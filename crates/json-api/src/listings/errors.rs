//! Listing Errors

use salvo::http::StatusError;
use tracing::error;

use nearsell_app::domain::listings::ListingsServiceError;

pub(crate) fn into_status_error(error: ListingsServiceError) -> StatusError {
    match error {
        ListingsServiceError::MissingRequiredData
        | ListingsServiceError::InvalidData
        | ListingsServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid listing payload")
        }
        ListingsServiceError::NotFound => StatusError::not_found().brief("Listing not found"),
        ListingsServiceError::Sql(source) => {
            error!("listing storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
