//! Skills and the bounded three-slot skill set.

use arrayvec::ArrayVec;

/// Default cooldown for advanced skills that do not configure their own.
pub const DEFAULT_ADVANCED_COOLDOWN: u8 = 3;

/// Default cooldown for ultimate skills that do not configure their own.
pub const DEFAULT_ULTIMATE_COOLDOWN: u8 = 5;

/// Which of the three skill slots a skill occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillSlot {
    /// Always usable, never on cooldown.
    Basic,
    /// Moderate cooldown, unlocked by elites and above.
    Advanced,
    /// Long cooldown, unlocked by bosses.
    Ultimate,
}

/// A single combat skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSkill {
    pub name: String,
    /// Base damage (or healing amount when `effect` marks a heal).
    pub base_damage: i64,
    /// Turns of cooldown after use; `None` means the slot default applies.
    pub cooldown: Option<u8>,
    /// Optional special-effect tag, reserved for the status system.
    pub effect: Option<String>,
    /// Whether the skill strikes the whole opposing side.
    pub area: bool,
}

impl BattleSkill {
    pub fn new(name: impl Into<String>, base_damage: i64) -> Self {
        Self {
            name: name.into(),
            base_damage,
            cooldown: None,
            effect: None,
            area: false,
        }
    }

    pub fn with_cooldown(mut self, turns: u8) -> Self {
        self.cooldown = Some(turns);
        self
    }
}

/// The exactly-three-slot skill layout every combatant carries.
///
/// `basic` is mandatory; `advanced` and `ultimate` are unlocked by unit
/// tier (enemies) or loadout (allies). The known slot set is fully
/// enumerated, so this is a fixed struct rather than an open map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSet {
    pub basic: BattleSkill,
    pub advanced: Option<BattleSkill>,
    pub ultimate: Option<BattleSkill>,
}

impl SkillSet {
    /// A skill set with only the basic slot filled.
    pub fn basic_only(basic: BattleSkill) -> Self {
        Self {
            basic,
            advanced: None,
            ultimate: None,
        }
    }

    /// The filled slots, in basic → advanced → ultimate order.
    pub fn slots(&self) -> ArrayVec<(SkillSlot, &BattleSkill), 3> {
        let mut slots = ArrayVec::new();
        slots.push((SkillSlot::Basic, &self.basic));
        if let Some(skill) = self.advanced.as_ref() {
            slots.push((SkillSlot::Advanced, skill));
        }
        if let Some(skill) = self.ultimate.as_ref() {
            slots.push((SkillSlot::Ultimate, skill));
        }
        slots
    }

    /// Mutable view of the filled slots.
    pub fn slots_mut(&mut self) -> ArrayVec<&mut BattleSkill, 3> {
        let mut slots = ArrayVec::new();
        slots.push(&mut self.basic);
        if let Some(skill) = self.advanced.as_mut() {
            slots.push(skill);
        }
        if let Some(skill) = self.ultimate.as_mut() {
            slots.push(skill);
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_iterate_in_slot_order() {
        let set = SkillSet {
            basic: BattleSkill::new("Strike", 10),
            advanced: None,
            ultimate: Some(BattleSkill::new("Judgement", 40).with_cooldown(6)),
        };
        let slots = set.slots();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].0, SkillSlot::Basic);
        assert_eq!(slots[1].0, SkillSlot::Ultimate);
        assert_eq!(slots[1].1.cooldown, Some(6));
    }
}
