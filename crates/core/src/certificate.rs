//! Certificate records and their storage encoding.
//!
//! The serde field names below are the storage contract: records already on
//! the ledger were written with them, so renaming one breaks decoding.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{RegistryError, RegistryResult};

/// Format of [`Artist::date_of_birth`], e.g. `20.11.1980`.
pub const DATE_OF_BIRTH_FORMAT: &str = "%d.%m.%Y";

// ---------------------------------------------------------------------------
// Stored records
// ---------------------------------------------------------------------------

/// The artist credited on a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Artist {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    #[serde(rename = "dateOfBirth")]
    #[validate(custom(function = "validate_date_of_birth"))]
    pub date_of_birth: String,
}

/// An ownership-bearing artwork certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "URI")]
    pub photo_uri: String,
    pub title: String,
    pub owner: String,
    #[serde(rename = "appraisedValue")]
    pub year_of_production: i64,
    pub artist: Artist,
}

// ---------------------------------------------------------------------------
// DTOs (operation inputs)
// ---------------------------------------------------------------------------

/// Input for creating a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificate {
    #[validate(length(min = 1))]
    pub id: String,
    pub photo_uri: String,
    pub title: String,
    #[validate(nested)]
    pub artist: Artist,
    #[validate(length(min = 1))]
    pub owner: String,
    pub year_of_production: i64,
}

/// Replacement fields for an update. Every field is written; nothing is
/// merged with the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificate {
    pub photo_uri: String,
    pub title: String,
    #[validate(nested)]
    pub artist: Artist,
    #[validate(length(min = 1))]
    pub owner: String,
    pub year_of_production: i64,
}

/// Input for an ownership transfer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransferCertificate {
    #[validate(length(min = 1))]
    pub new_owner: String,
}

impl From<CreateCertificate> for Certificate {
    fn from(input: CreateCertificate) -> Self {
        Self {
            id: input.id,
            photo_uri: input.photo_uri,
            title: input.title,
            owner: input.owner,
            year_of_production: input.year_of_production,
            artist: input.artist,
        }
    }
}

impl UpdateCertificate {
    /// Build the full replacement record for asset `id`.
    pub fn into_certificate(self, id: &str) -> Certificate {
        Certificate {
            id: id.to_owned(),
            photo_uri: self.photo_uri,
            title: self.title,
            owner: self.owner,
            year_of_production: self.year_of_production,
            artist: self.artist,
        }
    }
}

fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, DATE_OF_BIRTH_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date_of_birth_format"))
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode a certificate into the bytes stored at its key.
pub fn encode(certificate: &Certificate) -> RegistryResult<Vec<u8>> {
    serde_json::to_vec(certificate).map_err(|source| RegistryError::Serialization {
        id: certificate.id.clone(),
        source,
    })
}

/// Decode the bytes stored at `key`.
pub fn decode(key: &str, bytes: &[u8]) -> RegistryResult<Certificate> {
    serde_json::from_slice(bytes).map_err(|source| RegistryError::Deserialization {
        key: key.to_owned(),
        source,
    })
}
