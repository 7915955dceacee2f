//! Combatant model shared by allies and generated enemies.

use crate::element::Element;
use crate::skill::SkillSet;

/// Base stats of a combatant.
///
/// The known stat set is fully enumerated by this engine, so a fixed
/// struct replaces the source's open-ended stat map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    pub attack: i64,
    pub vitality: i64,
    pub speed: i64,
}

/// Percentage stat modifiers granted by an equipped aura.
///
/// Aggregation from raw character/aura records happens upstream; the
/// engine only reads the final percentages. All fields default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraBonus {
    pub attack: i32,
    pub vitality: i32,
    pub speed: i32,
    /// Additive critical-hit chance, in percentage points.
    pub focus: i32,
    pub accuracy: i32,
    /// Incoming-damage reduction, in percentage points.
    pub defense: i32,
    pub resilience: i32,
    pub element: Option<Element>,
}

/// A temporary effect attached to a unit.
///
/// Part of the model contract for the planned debuff system; the round
/// resolver does not yet read or mutate these.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub name: String,
    pub remaining_turns: u8,
    pub magnitude: i32,
}

/// A combatant: an ally resolved by the caller, or a generated enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleUnit {
    /// Stable identifier within one battle log.
    pub id: String,
    pub name: String,
    /// Current health. Never negative; zero means defeated.
    pub hp: i64,
    /// Immutable for the unit's lifetime within one stage.
    pub max_hp: i64,
    /// Reserved progress field for speed-based turn ordering.
    pub attack_meter: f64,
    pub stats: UnitStats,
    pub skills: SkillSet,
    pub aura_bonus: Option<AuraBonus>,
    /// Turns until the advanced skill is usable again.
    pub advanced_cooldown: u8,
    /// Turns until the ultimate skill is usable again.
    pub ultimate_cooldown: u8,
    pub status_effects: Vec<StatusEffect>,
}

impl BattleUnit {
    /// Create a unit at full health with cooldowns ready.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stats: UnitStats,
        max_hp: i64,
        skills: SkillSet,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hp: max_hp,
            max_hp,
            attack_meter: 0.0,
            stats,
            skills,
            aura_bonus: None,
            advanced_cooldown: 0,
            ultimate_cooldown: 0,
            status_effects: Vec::new(),
        }
    }

    pub fn with_aura(mut self, aura: AuraBonus) -> Self {
        self.aura_bonus = Some(aura);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Additive critical-chance bonus from the equipped aura, in points.
    pub fn focus_percent(&self) -> i32 {
        self.aura_bonus.as_ref().map_or(0, |aura| aura.focus)
    }

    /// Incoming-damage reduction from the equipped aura, in points.
    pub fn defense_percent(&self) -> i32 {
        self.aura_bonus.as_ref().map_or(0, |aura| aura.defense)
    }

    /// Scale the unit's offense by a percentage.
    ///
    /// Damage in this engine flows from skill base values, so the scale
    /// is applied to every skill slot as well as the attack stat. Used by
    /// the outcome reconciler's pre-battle bias.
    pub fn scale_attack(&mut self, percent: i32) {
        let factor = f64::from(100 + percent) / 100.0;
        self.stats.attack = (self.stats.attack as f64 * factor).floor() as i64;
        for skill in self.skills.slots_mut() {
            skill.base_damage = (skill.base_damage as f64 * factor).floor() as i64;
        }
    }

    /// Decrement both skill cooldowns by one turn, stopping at zero.
    pub fn tick_cooldowns(&mut self) {
        self.advanced_cooldown = self.advanced_cooldown.saturating_sub(1);
        self.ultimate_cooldown = self.ultimate_cooldown.saturating_sub(1);
    }
}
