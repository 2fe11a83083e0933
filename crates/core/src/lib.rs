//! Artwork certificate registry.
//!
//! Domain types, the canonical store-key policy, the [`WorldState`]
//! collaborator trait and the [`AssetRegistry`] operations built on it. This
//! crate has no network, file or environment surface; callers hand in a
//! world-state handle for every operation.
//!
//! [`WorldState`]: world_state::WorldState
//! [`AssetRegistry`]: registry::AssetRegistry

pub mod certificate;
pub mod error;
pub mod memory;
pub mod registry;
pub mod seed;
pub mod types;
pub mod world_state;
