use crate::world_state::StoreError;

/// Errors surfaced by [`AssetRegistry`](crate::registry::AssetRegistry)
/// operations.
///
/// Nothing is recovered locally: every variant reaches the caller with a
/// message naming the offending asset or key where there is one.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("the asset {id} does not exist")]
    AssetNotFound { id: String },

    #[error("the asset {id} already exists")]
    AssetAlreadyExists { id: String },

    #[error("failed to read from world state: {0}")]
    StoreRead(#[source] StoreError),

    #[error("failed to put to world state: {0}")]
    StoreWrite(#[source] StoreError),

    #[error("failed to encode certificate {id}: {source}")]
    Serialization {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode certificate at key {key}: {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for registry return values.
pub type RegistryResult<T> = Result<T, RegistryError>;
