use std::sync::Arc;

use artcert_core::world_state::WorldState;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the world state is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// World state every registry operation runs against.
    pub world_state: Arc<dyn WorldState>,
}
