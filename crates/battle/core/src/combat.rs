//! Round resolution.
//!
//! Pure combat math (critical chance, damage, HP application) plus the
//! two-sweep round loop. All randomness comes from the caller-supplied
//! [`BattleRng`]; nothing here touches global state.

use crate::event::BattleAction;
use crate::rng::BattleRng;
use crate::skill::{DEFAULT_ADVANCED_COOLDOWN, DEFAULT_ULTIMATE_COOLDOWN};
use crate::unit::BattleUnit;

/// Hard upper bound on rounds per stage; guarantees termination.
pub const MAX_ROUNDS_PER_STAGE: u32 = 10;

/// Base critical-hit chance before aura focus.
pub const BASE_CRIT_CHANCE: f64 = 0.05;

/// Ceiling on critical-hit chance regardless of focus.
pub const MAX_CRIT_CHANCE: f64 = 0.30;

/// Damage multiplier on a critical hit.
pub const CRIT_MULTIPLIER: f64 = 1.5;

/// Ceiling on defense damage reduction, in percentage points.
pub const MAX_DEFENSE_REDUCTION: i32 = 50;

/// Result of resolving one round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    /// All ally actions first, then all enemy actions.
    pub actions: Vec<BattleAction>,
    pub living_allies: usize,
    pub living_enemies: usize,
}

/// Critical-hit chance for an attacker.
///
/// # Formula
///
/// ```text
/// chance = min(0.05 + focus/100, 0.30)
/// ```
pub fn critical_chance(attacker: &BattleUnit) -> f64 {
    let focus = f64::from(attacker.focus_percent()) / 100.0;
    (BASE_CRIT_CHANCE + focus).min(MAX_CRIT_CHANCE)
}

/// Damage dealt by a skill against a defender.
///
/// # Formula
///
/// ```text
/// damage = base
/// if critical: damage = floor(damage * 1.5)
/// damage -= damage * min(defense, 50)%
/// damage = max(floor(damage), 1)
/// ```
pub fn skill_damage(base_damage: i64, is_critical: bool, defender: &BattleUnit) -> i64 {
    let mut damage = base_damage as f64;
    if is_critical {
        damage = (damage * CRIT_MULTIPLIER).floor();
    }

    let defense = defender
        .defense_percent()
        .clamp(0, MAX_DEFENSE_REDUCTION);
    if defense > 0 {
        damage = damage * f64::from(100 - defense) / 100.0;
    }

    (damage.floor() as i64).max(1)
}

/// Apply damage to current HP, floored at zero.
pub fn apply_damage(hp: i64, damage: i64) -> i64 {
    (hp - damage).max(0)
}

/// Resolve one round of combat.
///
/// Each living ally attacks a uniformly random living enemy, then each
/// surviving enemy attacks a uniformly random living ally. Units that
/// drop to zero HP mid-round are removed from the round-local living
/// lists immediately, so nothing targets or acts from the dead. All
/// nonzero cooldowns are decremented once after both sweeps.
///
/// If either side starts the round with no living units the round
/// resolves to zero actions; the caller stops its loop on that signal.
pub fn resolve_round(
    allies: &mut [BattleUnit],
    enemies: &mut [BattleUnit],
    rng: &mut BattleRng,
) -> RoundOutcome {
    let mut ally_pool = living_indices(allies);
    let mut enemy_pool = living_indices(enemies);
    let mut actions = Vec::new();

    if ally_pool.is_empty() || enemy_pool.is_empty() {
        return RoundOutcome {
            actions,
            living_allies: ally_pool.len(),
            living_enemies: enemy_pool.len(),
        };
    }

    let attackers = ally_pool.clone();
    sweep(allies, &attackers, enemies, &mut enemy_pool, rng, &mut actions);

    // Only enemies that survived the ally sweep may act.
    let attackers = enemy_pool.clone();
    sweep(enemies, &attackers, allies, &mut ally_pool, rng, &mut actions);

    for unit in allies.iter_mut().chain(enemies.iter_mut()) {
        unit.tick_cooldowns();
    }

    RoundOutcome {
        actions,
        living_allies: ally_pool.len(),
        living_enemies: enemy_pool.len(),
    }
}

fn living_indices(units: &[BattleUnit]) -> Vec<usize> {
    units
        .iter()
        .enumerate()
        .filter_map(|(index, unit)| unit.is_alive().then_some(index))
        .collect()
}

/// One side's attack sweep. `defender_pool` shrinks as targets fall.
fn sweep(
    attackers: &mut [BattleUnit],
    attacker_pool: &[usize],
    defenders: &mut [BattleUnit],
    defender_pool: &mut Vec<usize>,
    rng: &mut BattleRng,
    actions: &mut Vec<BattleAction>,
) {
    for &attacker_index in attacker_pool {
        if defender_pool.is_empty() {
            break;
        }

        let pick = rng.pick_index(defender_pool.len());
        let target_index = defender_pool[pick];

        let (skill_name, base_damage) = choose_skill(&mut attackers[attacker_index]);
        let is_critical = rng.next_bool(critical_chance(&attackers[attacker_index]));
        let damage = skill_damage(base_damage, is_critical, &defenders[target_index]);

        defenders[target_index].hp = apply_damage(defenders[target_index].hp, damage);
        actions.push(BattleAction {
            actor: attackers[attacker_index].name.clone(),
            skill: skill_name,
            target: defenders[target_index].name.clone(),
            damage,
            is_critical,
            is_healing: false,
            message: None,
        });

        if !defenders[target_index].is_alive() {
            defender_pool.remove(pick);
        }
    }
}

/// Pick the strongest usable skill and start its cooldown.
///
/// Preference order: ultimate, advanced, basic. A slot is usable when it
/// exists and its cooldown counter is at zero.
fn choose_skill(unit: &mut BattleUnit) -> (String, i64) {
    if let Some(ultimate) = unit.skills.ultimate.as_ref() {
        if unit.ultimate_cooldown == 0 {
            unit.ultimate_cooldown = ultimate.cooldown.unwrap_or(DEFAULT_ULTIMATE_COOLDOWN);
            return (ultimate.name.clone(), ultimate.base_damage);
        }
    }
    if let Some(advanced) = unit.skills.advanced.as_ref() {
        if unit.advanced_cooldown == 0 {
            unit.advanced_cooldown = advanced.cooldown.unwrap_or(DEFAULT_ADVANCED_COOLDOWN);
            return (advanced.name.clone(), advanced.base_damage);
        }
    }
    (unit.skills.basic.name.clone(), unit.skills.basic.base_damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{BattleSkill, SkillSet};
    use crate::unit::{AuraBonus, UnitStats};

    fn fighter(name: &str, damage: i64, hp: i64) -> BattleUnit {
        BattleUnit::new(
            name,
            name,
            UnitStats {
                attack: damage,
                vitality: hp / 8,
                speed: 10,
            },
            hp,
            SkillSet::basic_only(BattleSkill::new("Strike", damage)),
        )
    }

    #[test]
    fn critical_chance_is_capped() {
        let plain = fighter("a", 10, 80);
        assert_eq!(critical_chance(&plain), BASE_CRIT_CHANCE);

        let focused = fighter("b", 10, 80).with_aura(AuraBonus {
            focus: 90,
            ..AuraBonus::default()
        });
        assert_eq!(critical_chance(&focused), MAX_CRIT_CHANCE);
    }

    #[test]
    fn damage_has_floor_of_one() {
        let tank = fighter("t", 10, 80).with_aura(AuraBonus {
            defense: 100,
            ..AuraBonus::default()
        });
        // Defense caps at 50%, and even 1 base damage still lands for 1.
        assert_eq!(skill_damage(1, false, &tank), 1);
        assert_eq!(skill_damage(100, false, &tank), 50);
    }

    #[test]
    fn critical_multiplies_before_defense() {
        let tank = fighter("t", 10, 80).with_aura(AuraBonus {
            defense: 20,
            ..AuraBonus::default()
        });
        // floor(21 * 1.5) = 31, then 80% of 31 = 24.8 -> 24.
        assert_eq!(skill_damage(21, true, &tank), 24);
    }

    #[test]
    fn empty_side_resolves_to_no_actions() {
        let mut allies = vec![fighter("a", 10, 80)];
        let mut enemies = vec![fighter("e", 10, 0)];
        enemies[0].hp = 0;
        let mut rng = BattleRng::new(1);

        let outcome = resolve_round(&mut allies, &mut enemies, &mut rng);
        assert!(outcome.actions.is_empty());
        assert_eq!(outcome.living_allies, 1);
        assert_eq!(outcome.living_enemies, 0);
    }

    #[test]
    fn dead_targets_leave_the_round_pool() {
        // Two overwhelming allies against one fragile enemy: the second
        // ally must have nobody left to hit.
        let mut allies = vec![fighter("a1", 500, 100), fighter("a2", 500, 100)];
        let mut enemies = vec![fighter("e1", 1, 10)];
        let mut rng = BattleRng::new(3);

        let outcome = resolve_round(&mut allies, &mut enemies, &mut rng);
        let ally_actions = outcome
            .actions
            .iter()
            .filter(|action| action.actor.starts_with('a'))
            .count();
        assert_eq!(ally_actions, 1);
        assert_eq!(outcome.living_enemies, 0);
        // The dead enemy never got to act.
        assert!(outcome.actions.iter().all(|action| action.actor != "e1"));
    }

    #[test]
    fn ultimate_preferred_then_cooldown_gates_it() {
        let skills = SkillSet {
            basic: BattleSkill::new("Jab", 5),
            advanced: Some(BattleSkill::new("Hook", 9).with_cooldown(2)),
            ultimate: Some(BattleSkill::new("Haymaker", 20).with_cooldown(4)),
        };
        let mut unit = BattleUnit::new(
            "u",
            "u",
            UnitStats {
                attack: 5,
                vitality: 10,
                speed: 10,
            },
            80,
            skills,
        );

        assert_eq!(choose_skill(&mut unit).0, "Haymaker");
        assert_eq!(unit.ultimate_cooldown, 4);
        // Ultimate now gated; advanced is next in line.
        assert_eq!(choose_skill(&mut unit).0, "Hook");
        assert_eq!(unit.advanced_cooldown, 2);
        // Both gated; basic always works.
        assert_eq!(choose_skill(&mut unit).0, "Jab");
    }
}
