/// Physical key addressing a certificate inside the world state.
///
/// The only constructor is [`StoreKey::for_asset`], so every operation that
/// touches an asset derives its key the same way. The key depends on the
/// asset id alone: the owner is mutable and must never take part in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKey(String);

impl StoreKey {
    /// Canonical key for the asset with logical id `id`.
    pub fn for_asset(id: &str) -> Self {
        Self(id.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
