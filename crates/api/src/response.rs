//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })`.

use artcert_core::certificate::{Artist, Certificate};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Certificate as the HTTP API presents it.
///
/// Field names match the create/update request bodies, so a client can PUT
/// back what it read. The stored JSON keeps its own names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateView {
    pub id: String,
    pub photo_uri: String,
    pub title: String,
    pub artist: Artist,
    pub owner: String,
    pub year_of_production: i64,
}

impl From<Certificate> for CertificateView {
    fn from(certificate: Certificate) -> Self {
        Self {
            id: certificate.id,
            photo_uri: certificate.photo_uri,
            title: certificate.title,
            artist: certificate.artist,
            owner: certificate.owner,
            year_of_production: certificate.year_of_production,
        }
    }
}
