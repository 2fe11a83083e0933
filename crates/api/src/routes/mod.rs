pub mod certificates;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ledger/init                       seed the world state (POST)
/// /certificates                      list, create
/// /certificates/{id}                 read, update, delete
/// /certificates/{id}/exists          existence check
/// /certificates/{id}/transfer        ownership transfer (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ledger", certificates::ledger_router())
        .nest("/certificates", certificates::router())
}
