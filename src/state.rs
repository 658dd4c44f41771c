//! Shared application state for all routes. Holds no connections; each request opens its own.

use crate::settings::AdminPolicy;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub policy: AdminPolicy,
}
