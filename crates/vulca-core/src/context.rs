use crate::identity::IdentityTable;
use crate::physics::{PhysicsConfig, PhysicsEngine};

/// Shared services handed to the gallery instead of globals.
#[derive(Debug)]
pub struct GalleryContext {
    pub identities: IdentityTable,
    pub physics: PhysicsEngine,
}

impl GalleryContext {
    pub fn new(identities: IdentityTable, physics: PhysicsEngine) -> Self {
        Self {
            identities,
            physics,
        }
    }

    /// Built-in identities and Perlin wind seeded with `seed`.
    pub fn seeded(config: PhysicsConfig, seed: u64) -> Self {
        Self::new(IdentityTable::builtin(), PhysicsEngine::with_seed(config, seed))
    }
}

impl Default for GalleryContext {
    fn default() -> Self {
        Self::new(IdentityTable::builtin(), PhysicsEngine::default())
    }
}
