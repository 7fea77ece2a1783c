use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use advocate_core::error::CoreError;
use advocate_db::db::store::AdvocateStore;

/// Shared handle to whichever store backs the directory.
pub type SharedStore = Arc<dyn AdvocateStore + Send + Sync>;

pub struct StoreHandler {
    pub store: SharedStore,
}

impl StoreHandler {
    #[must_use]
    pub fn new<T: AdvocateStore + 'static>(store: T) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the advocate store from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<SharedStore> {
    depot
        .obtain::<SharedStore>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Advocate store not found in depot").into())
}
