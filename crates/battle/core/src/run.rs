//! Dungeon run input model.

use crate::element::Element;
use crate::rng::derive_seed;
use crate::unit::BattleUnit;

/// Parameters of one dungeon run, supplied by the caller.
///
/// The ally roster arrives pre-resolved: base stats, skill kits, and
/// aggregated aura bonuses are computed upstream from character and
/// equipment records. `id` and `created_at_ms` are the immutable
/// identity the battle seed derives from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonRun {
    pub id: u64,
    /// Creation time in milliseconds since the epoch.
    pub created_at_ms: u64,
    /// Must be at least 1.
    pub dungeon_level: u32,
    pub element: Element,
    /// Must be at least 1.
    pub total_stages: u32,
    pub allies: Vec<BattleUnit>,
}

impl DungeonRun {
    /// The deterministic battle seed for this run.
    pub fn seed(&self) -> u32 {
        derive_seed(self.id, self.created_at_ms)
    }
}
