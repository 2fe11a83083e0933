//! Certificate registry operations.
//!
//! [`AssetRegistry`] is stateless: each operation takes the world-state handle
//! it should run against and awaits its store calls one after another. Store
//! keys are derived only through [`StoreKey::for_asset`], so the key checked
//! for existence, the key read and the key written for an asset never differ.

use crate::certificate::{decode, encode, Certificate, CreateCertificate, UpdateCertificate};
use crate::error::{RegistryError, RegistryResult};
use crate::seed::seed_certificates;
use crate::types::StoreKey;
use crate::world_state::{StateIterator, WorldState};

/// Open bounds for a full-namespace range scan.
const FULL_RANGE: (&str, &str) = ("", "");

/// Provides the certificate lifecycle operations.
pub struct AssetRegistry;

impl AssetRegistry {
    // -----------------------------------------------------------------------
    // Seeding
    // -----------------------------------------------------------------------

    /// Write the seed certificates. Stops at the first failed write; seeds
    /// written before it stay in place. Existing records under the same keys
    /// are overwritten.
    pub async fn initialize<S>(state: &S) -> RegistryResult<()>
    where
        S: WorldState + ?Sized,
    {
        let seeds = seed_certificates();
        let count = seeds.len();

        for certificate in &seeds {
            if let Err(err) = Self::write(state, certificate).await {
                tracing::warn!(
                    asset_id = %certificate.id,
                    error = %err,
                    "Seed write failed, aborting initialization",
                );
                return Err(err);
            }
        }

        tracing::info!(count, "World state seeded");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Certificate CRUD
    // -----------------------------------------------------------------------

    /// Issue a new certificate. Fails if a live asset already holds the id.
    pub async fn create<S>(state: &S, input: &CreateCertificate) -> RegistryResult<Certificate>
    where
        S: WorldState + ?Sized,
    {
        if Self::asset_exists(state, &input.id).await? {
            return Err(RegistryError::AssetAlreadyExists {
                id: input.id.clone(),
            });
        }

        let certificate = Certificate::from(input.clone());
        Self::write(state, &certificate).await?;

        tracing::info!(
            asset_id = %certificate.id,
            owner = %certificate.owner,
            "Certificate created",
        );
        Ok(certificate)
    }

    /// Read the certificate stored for `id`.
    pub async fn read<S>(state: &S, id: &str) -> RegistryResult<Certificate>
    where
        S: WorldState + ?Sized,
    {
        let key = StoreKey::for_asset(id);
        let bytes = state
            .get_state(key.as_str())
            .await
            .map_err(RegistryError::StoreRead)?
            .ok_or_else(|| RegistryError::AssetNotFound { id: id.to_owned() })?;

        tracing::debug!(asset_id = %id, "Certificate read");
        decode(key.as_str(), &bytes)
    }

    /// Replace every field of the certificate for `id`. The record is
    /// rewritten at the same key; the id itself never changes.
    pub async fn update<S>(
        state: &S,
        id: &str,
        input: &UpdateCertificate,
    ) -> RegistryResult<Certificate>
    where
        S: WorldState + ?Sized,
    {
        Self::ensure_exists(state, id).await?;

        let certificate = input.clone().into_certificate(id);
        Self::write(state, &certificate).await?;

        tracing::info!(asset_id = %id, "Certificate updated");
        Ok(certificate)
    }

    /// Remove the certificate for `id`.
    pub async fn delete<S>(state: &S, id: &str) -> RegistryResult<()>
    where
        S: WorldState + ?Sized,
    {
        Self::ensure_exists(state, id).await?;

        let key = StoreKey::for_asset(id);
        state
            .del_state(key.as_str())
            .await
            .map_err(RegistryError::StoreWrite)?;

        tracing::info!(asset_id = %id, "Certificate deleted");
        Ok(())
    }

    /// Hand the certificate for `id` to `new_owner`, keeping every other
    /// field, and persist the full updated record.
    pub async fn transfer<S>(state: &S, id: &str, new_owner: &str) -> RegistryResult<Certificate>
    where
        S: WorldState + ?Sized,
    {
        let mut certificate = Self::read(state, id).await?;
        let previous_owner = std::mem::replace(&mut certificate.owner, new_owner.to_owned());
        Self::write(state, &certificate).await?;

        tracing::info!(
            asset_id = %id,
            from = %previous_owner,
            to = %new_owner,
            "Certificate transferred",
        );
        Ok(certificate)
    }

    /// Whether a live certificate is stored for `id`.
    pub async fn asset_exists<S>(state: &S, id: &str) -> RegistryResult<bool>
    where
        S: WorldState + ?Sized,
    {
        let key = StoreKey::for_asset(id);
        let bytes = state
            .get_state(key.as_str())
            .await
            .map_err(RegistryError::StoreRead)?;
        Ok(bytes.is_some())
    }

    // -----------------------------------------------------------------------
    // Enumeration
    // -----------------------------------------------------------------------

    /// Every certificate in the store, in scan order. A record that fails to
    /// decode aborts the listing. The scan cursor is closed before returning
    /// on every path.
    pub async fn list_all<S>(state: &S) -> RegistryResult<Vec<Certificate>>
    where
        S: WorldState + ?Sized,
    {
        let (start_key, end_key) = FULL_RANGE;
        let mut cursor = state
            .state_by_range(start_key, end_key)
            .await
            .map_err(RegistryError::StoreRead)?;

        let drained = drain_certificates(cursor.as_mut()).await;
        let closed = cursor.close().await;

        let certificates = match (drained, closed) {
            (Ok(certificates), Ok(())) => certificates,
            (Ok(_), Err(err)) => return Err(RegistryError::StoreRead(err)),
            (Err(err), close_result) => {
                if let Err(close_err) = close_result {
                    tracing::warn!(error = %close_err, "Failed to close range cursor");
                }
                return Err(err);
            }
        };

        tracing::debug!(count = certificates.len(), "Certificates listed");
        Ok(certificates)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn ensure_exists<S>(state: &S, id: &str) -> RegistryResult<()>
    where
        S: WorldState + ?Sized,
    {
        if !Self::asset_exists(state, id).await? {
            return Err(RegistryError::AssetNotFound { id: id.to_owned() });
        }
        Ok(())
    }

    async fn write<S>(state: &S, certificate: &Certificate) -> RegistryResult<()>
    where
        S: WorldState + ?Sized,
    {
        let key = StoreKey::for_asset(&certificate.id);
        let bytes = encode(certificate)?;
        state
            .put_state(key.as_str(), bytes)
            .await
            .map_err(RegistryError::StoreWrite)
    }
}

async fn drain_certificates(
    cursor: &mut (dyn StateIterator + '_),
) -> RegistryResult<Vec<Certificate>> {
    let mut certificates = Vec::new();
    while let Some(entry) = cursor
        .next_entry()
        .await
        .map_err(RegistryError::StoreRead)?
    {
        certificates.push(decode(&entry.key, &entry.value)?);
    }
    Ok(certificates)
}
