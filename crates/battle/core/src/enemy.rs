//! Enemy roster generation.
//!
//! Builds one stage's enemy pack from the dungeon level, element, and
//! stage position. Difficulty escalates with stage progress and special
//! tiers (elite, stage boss, final boss) are assigned positionally; all
//! flavor (names, skill kits) comes from the [`Bestiary`] oracle.

use crate::bestiary::{Bestiary, SkillTemplate};
use crate::element::Element;
use crate::rng::BattleRng;
use crate::skill::{BattleSkill, SkillSet, SkillSlot};
use crate::tier::UnitTier;
use crate::unit::{BattleUnit, UnitStats};

/// Default pack size requested by the stage orchestrator.
pub const BASE_PACK_SIZE: usize = 2;

/// Hard cap on units per stage.
pub const MAX_PACK_SIZE: usize = 3;

/// Multiplier on vitality to produce max HP.
const HP_PER_VITALITY: i64 = 8;

/// Generate the enemy roster for one stage.
///
/// Base stats scale linearly with the dungeon level, then by a
/// difficulty multiplier of `1 + 0.7 * stage_progress`. In the final
/// 30% of stages one extra unit joins the pack (capped at three). Tier
/// multipliers are applied on top per unit.
pub fn generate(
    dungeon_level: u32,
    element: Element,
    unit_count: usize,
    current_stage: u32,
    total_stages: u32,
    rng: &mut BattleRng,
    bestiary: &impl Bestiary,
) -> Vec<BattleUnit> {
    let progress = f64::from(current_stage) / f64::from(total_stages);
    let difficulty = 1.0 + progress * 0.7;

    let mut count = unit_count.clamp(1, MAX_PACK_SIZE);
    if progress > 0.7 && count < MAX_PACK_SIZE {
        count += 1;
    }

    let level = f64::from(dungeon_level);
    let base_attack = (8.0 + 1.5 * level) * difficulty;
    let base_vitality = (10.0 + 2.0 * level) * difficulty;
    let base_speed = (6.0 + level) * difficulty;

    (0..count)
        .map(|index| {
            let tier = UnitTier::assign(index, count, current_stage, total_stages);
            let profile = tier.profile();

            let stats = UnitStats {
                attack: (base_attack * profile.strength_multiplier).floor() as i64,
                vitality: (base_vitality * profile.strength_multiplier).floor() as i64,
                speed: (base_speed * profile.strength_multiplier).floor() as i64,
            };
            let max_hp = stats.vitality * HP_PER_VITALITY;

            let pool = bestiary.name_pool(element, tier);
            let base_name = pool[rng.pick_index(pool.len())];
            let name = match tier {
                UnitTier::FinalBoss => format!("{base_name} (Final Boss)"),
                UnitTier::StageBoss => format!("{base_name} (Stage {current_stage} Boss)"),
                _ => base_name.to_string(),
            };

            let skills = build_skills(stats.attack, element, tier, bestiary);

            BattleUnit::new(
                format!("enemy-{current_stage}-{index}"),
                name,
                stats,
                max_hp,
                skills,
            )
        })
        .collect()
}

fn build_skills(
    attack: i64,
    element: Element,
    tier: UnitTier,
    bestiary: &impl Bestiary,
) -> SkillSet {
    let profile = tier.profile();
    let from_template = |template: SkillTemplate| {
        let mut skill = BattleSkill::new(
            template.name,
            (attack as f64 * template.damage_scale).floor() as i64,
        );
        skill.cooldown = template.cooldown;
        skill
    };

    SkillSet {
        basic: from_template(bestiary.skill_template(element, SkillSlot::Basic)),
        advanced: profile
            .unlock_advanced
            .then(|| from_template(bestiary.skill_template(element, SkillSlot::Advanced))),
        ultimate: profile
            .unlock_ultimate
            .then(|| from_template(bestiary.skill_template(element, SkillSlot::Ultimate))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestBestiary;

    #[test]
    fn pack_grows_near_the_end() {
        let mut rng = BattleRng::new(11);
        let early = generate(3, Element::Fire, 2, 1, 10, &mut rng, &TestBestiary);
        assert_eq!(early.len(), 2);

        let late = generate(3, Element::Fire, 2, 9, 10, &mut rng, &TestBestiary);
        assert_eq!(late.len(), 3);

        // Already at the cap: no growth.
        let capped = generate(3, Element::Fire, 3, 10, 10, &mut rng, &TestBestiary);
        assert_eq!(capped.len(), 3);
    }

    #[test]
    fn final_boss_carries_full_kit_and_annotation() {
        let mut rng = BattleRng::new(5);
        let pack = generate(5, Element::Shadow, 3, 3, 3, &mut rng, &TestBestiary);

        let boss = pack.last().unwrap();
        assert!(boss.name.ends_with("(Final Boss)"));
        assert!(boss.skills.advanced.is_some());
        assert!(boss.skills.ultimate.is_some());

        let grunt = &pack[0];
        assert!(grunt.skills.advanced.is_none());
        assert!(grunt.skills.ultimate.is_none());
    }

    #[test]
    fn boss_outclasses_regulars() {
        let mut rng = BattleRng::new(5);
        let pack = generate(5, Element::Ice, 3, 1, 3, &mut rng, &TestBestiary);
        let boss = pack.last().unwrap();
        let grunt = &pack[0];
        assert!(boss.stats.attack > grunt.stats.attack);
        assert!(boss.max_hp > grunt.max_hp);
        assert_eq!(boss.max_hp, boss.stats.vitality * 8);
    }

    #[test]
    fn later_stages_are_harder() {
        let mut rng = BattleRng::new(5);
        let first = generate(5, Element::Fire, 2, 1, 8, &mut rng, &TestBestiary);
        let last = generate(5, Element::Fire, 2, 8, 8, &mut rng, &TestBestiary);
        assert!(last[0].stats.attack > first[0].stats.attack);
        assert!(last[0].max_hp > first[0].max_hp);
    }

    #[test]
    fn enemy_ids_encode_stage_and_position() {
        let mut rng = BattleRng::new(2);
        let pack = generate(1, Element::Neutral, 2, 4, 8, &mut rng, &TestBestiary);
        assert_eq!(pack[0].id, "enemy-4-0");
        assert_eq!(pack[1].id, "enemy-4-1");
    }
}
