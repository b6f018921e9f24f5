//! API server state

use std::sync::Arc;

use crate::clock::Clock;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Source of the time of day reported by `/time`
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}
