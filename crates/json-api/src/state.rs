//! State

use std::sync::Arc;

use salvo::{Depot, http::StatusError};

use nearsell_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }

    /// Pulls the injected state out of the depot. A missing entry maps to a
    /// 500, since it means the router was built without `inject`.
    pub(crate) fn from_depot(depot: &Depot) -> Result<&Arc<Self>, StatusError> {
        depot
            .obtain::<Arc<Self>>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}
