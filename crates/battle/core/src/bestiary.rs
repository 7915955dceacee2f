//! Content oracle consumed by the enemy generator.
//!
//! The engine never hard-codes enemy flavor. Name pools and skill
//! templates are supplied through the [`Bestiary`] trait so that content
//! crates (or tests) can swap the tables without touching the generation
//! algorithm.

use crate::element::Element;
use crate::skill::SkillSlot;
use crate::tier::UnitTier;

/// Blueprint for building a concrete skill from a unit's attack stat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillTemplate {
    pub name: &'static str,
    /// Multiplier applied to the unit's attack stat for base damage.
    pub damage_scale: f64,
    /// Cooldown in turns; `None` for slots that use the engine default.
    pub cooldown: Option<u8>,
}

/// Element- and tier-keyed enemy flavor tables.
pub trait Bestiary {
    /// Candidate names for a unit of the given element and tier.
    ///
    /// Must be non-empty for every combination; the generator draws one
    /// name uniformly via the shared battle RNG.
    fn name_pool(&self, element: Element, tier: UnitTier) -> &[&str];

    /// Skill template for the given element and slot.
    fn skill_template(&self, element: Element, slot: SkillSlot) -> SkillTemplate;
}
