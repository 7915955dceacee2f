//! Shared fixtures for the crate's unit tests.

use crate::bestiary::{Bestiary, SkillTemplate};
use crate::element::Element;
use crate::run::DungeonRun;
use crate::skill::{BattleSkill, SkillSet, SkillSlot};
use crate::tier::UnitTier;
use crate::unit::{AuraBonus, BattleUnit, UnitStats};

/// Minimal bestiary with deterministic, element-agnostic tables.
pub(crate) struct TestBestiary;

impl Bestiary for TestBestiary {
    fn name_pool(&self, _element: Element, tier: UnitTier) -> &[&str] {
        match tier {
            UnitTier::Regular => &["Grunt", "Lurker"],
            UnitTier::Elite => &["Elite Lurker"],
            UnitTier::StageBoss | UnitTier::FinalBoss => &["Overlord"],
        }
    }

    fn skill_template(&self, _element: Element, slot: SkillSlot) -> SkillTemplate {
        match slot {
            SkillSlot::Basic => SkillTemplate {
                name: "Swipe",
                damage_scale: 1.0,
                cooldown: None,
            },
            SkillSlot::Advanced => SkillTemplate {
                name: "Rend",
                damage_scale: 1.6,
                cooldown: Some(3),
            },
            SkillSlot::Ultimate => SkillTemplate {
                name: "Annihilate",
                damage_scale: 2.4,
                cooldown: Some(5),
            },
        }
    }
}

/// A capable ally party of `count` members.
pub(crate) fn party(count: usize) -> Vec<BattleUnit> {
    (0..count)
        .map(|index| {
            let stats = UnitStats {
                attack: 30,
                vitality: 50,
                speed: 12,
            };
            let skills = SkillSet {
                basic: BattleSkill::new("Slash", 30),
                advanced: Some(BattleSkill::new("Whirlwind", 48).with_cooldown(3)),
                ultimate: None,
            };
            let mut unit = BattleUnit::new(
                format!("char-{index}"),
                format!("Hero {index}"),
                stats,
                400,
                skills,
            );
            if index == 0 {
                unit = unit.with_aura(AuraBonus {
                    focus: 10,
                    defense: 15,
                    ..AuraBonus::default()
                });
            }
            unit
        })
        .collect()
}

/// A run with fixed identity and the given roster.
pub(crate) fn run_with_allies(allies: Vec<BattleUnit>) -> DungeonRun {
    DungeonRun {
        id: 42,
        created_at_ms: 1_700_000_000_000,
        dungeon_level: 5,
        element: Element::Fire,
        total_stages: 3,
        allies,
    }
}
