//! Handlers for the certificate registry.
//!
//! Each handler validates its input, runs one registry operation against the
//! shared world state and wraps the result in the `{ "data": ... }` envelope.

use artcert_core::certificate::{CreateCertificate, TransferCertificate, UpdateCertificate};
use artcert_core::registry::AssetRegistry;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::error::AppResult;
use crate::response::{CertificateView, DataResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ExistsResponse {
    exists: bool,
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// POST /api/v1/ledger/init
///
/// Write the seed certificates.
pub async fn init_ledger(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    AssetRegistry::initialize(state.world_state.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Certificate CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/certificates
///
/// List every certificate in scan order.
pub async fn list_certificates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let certificates: Vec<CertificateView> = AssetRegistry::list_all(state.world_state.as_ref())
        .await?
        .into_iter()
        .map(CertificateView::from)
        .collect();
    Ok(Json(DataResponse { data: certificates }))
}

/// POST /api/v1/certificates
///
/// Issue a new certificate.
pub async fn create_certificate(
    State(state): State<AppState>,
    Json(input): Json<CreateCertificate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let certificate = AssetRegistry::create(state.world_state.as_ref(), &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CertificateView::from(certificate),
        }),
    ))
}

/// GET /api/v1/certificates/{id}
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let certificate = AssetRegistry::read(state.world_state.as_ref(), &id).await?;
    Ok(Json(DataResponse {
        data: CertificateView::from(certificate),
    }))
}

/// PUT /api/v1/certificates/{id}
///
/// Replace every field of an existing certificate.
pub async fn update_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCertificate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let certificate = AssetRegistry::update(state.world_state.as_ref(), &id, &input).await?;
    Ok(Json(DataResponse {
        data: CertificateView::from(certificate),
    }))
}

/// DELETE /api/v1/certificates/{id}
pub async fn delete_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    AssetRegistry::delete(state.world_state.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/certificates/{id}/exists
pub async fn certificate_exists(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let exists = AssetRegistry::asset_exists(state.world_state.as_ref(), &id).await?;
    Ok(Json(DataResponse {
        data: ExistsResponse { exists },
    }))
}

/// POST /api/v1/certificates/{id}/transfer
///
/// Hand a certificate to a new owner.
pub async fn transfer_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<TransferCertificate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let certificate =
        AssetRegistry::transfer(state.world_state.as_ref(), &id, &input.new_owner).await?;
    Ok(Json(DataResponse {
        data: CertificateView::from(certificate),
    }))
}
