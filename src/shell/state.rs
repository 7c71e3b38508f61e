use crate::modules::users::core::store::UserStore;
use std::sync::Arc;

// Process-wide state: one store, created at startup, shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore + Send + Sync>,
}
