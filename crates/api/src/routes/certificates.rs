//! Route definitions for the certificate registry.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::certificates;
use crate::state::AppState;

/// Certificate routes mounted at `/certificates`.
///
/// ```text
/// GET    /                 -> list_certificates
/// POST   /                 -> create_certificate
/// GET    /{id}             -> get_certificate
/// PUT    /{id}             -> update_certificate
/// DELETE /{id}             -> delete_certificate
/// GET    /{id}/exists      -> certificate_exists
/// POST   /{id}/transfer    -> transfer_certificate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(certificates::list_certificates).post(certificates::create_certificate),
        )
        .route(
            "/{id}",
            get(certificates::get_certificate)
                .put(certificates::update_certificate)
                .delete(certificates::delete_certificate),
        )
        .route("/{id}/exists", get(certificates::certificate_exists))
        .route("/{id}/transfer", post(certificates::transfer_certificate))
}

/// Ledger maintenance routes mounted at `/ledger`.
///
/// ```text
/// POST   /init             -> init_ledger
/// ```
pub fn ledger_router() -> Router<AppState> {
    Router::new().route("/init", post(certificates::init_ledger))
}
