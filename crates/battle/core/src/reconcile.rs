//! Outcome reconciliation.
//!
//! The surrounding game decides success or failure before combat is
//! simulated; the log must end consistently with that decision while
//! still reading like an organic battle. Two mechanisms keep the two in
//! agreement: a pre-battle attack bias that usually makes the organic
//! result match, and narrative corrective events appended when the
//! opening encounter disagrees anyway.

use crate::bestiary::Bestiary;
use crate::event::BattleAction;
use crate::log::BattleSimulator;
use crate::unit::BattleUnit;

/// Ally attack boost applied when the run is predetermined to succeed.
pub const ALLY_SUCCESS_ATTACK_BOOST: i32 = 20;

/// Enemy attack boost applied when the run is predetermined to fail.
pub const ENEMY_FAILURE_ATTACK_BOOST: i32 = 30;

/// Name attributed to the synthetic party-wipe action.
pub const TRAP_ACTOR: &str = "Dungeon Trap";

impl<'a, B: Bestiary> BattleSimulator<'a, B> {
    /// Tilt the odds toward the predetermined outcome before any round
    /// is recorded.
    ///
    /// Success: allies fight at +20% attack and enter at full health.
    /// Failure: enemy rosters are boosted instead, at generation time
    /// (see `generate_stage_enemies`).
    pub(crate) fn apply_outcome_bias(&mut self) {
        if self.success {
            for ally in &mut self.allies {
                ally.scale_attack(ALLY_SUCCESS_ATTACK_BOOST);
                ally.hp = ally.max_hp;
            }
        }
    }

    /// Force the opening encounter's result to agree with the
    /// predetermined outcome.
    ///
    /// Disagreements are patched with narrative events rather than a
    /// silent rewrite: a surge of finishing blows when success is owed,
    /// or a hidden trap when failure is.
    pub(crate) fn reconcile_opening(&mut self, enemies: &mut [BattleUnit], rounds_fought: u32) {
        let enemies_alive = enemies.iter().any(BattleUnit::is_alive);
        let allies_alive = self.allies.iter().any(BattleUnit::is_alive);

        if self.success && enemies_alive {
            self.log
                .system_message("A mysterious energy surges through the party!");

            if !allies_alive {
                // The surge drags the fallen back to their feet so the
                // finishing blows come from the living.
                for ally in &mut self.allies {
                    ally.hp = ally.hp.max(1);
                }
            }

            let survivors: Vec<usize> = enemies
                .iter()
                .enumerate()
                .filter_map(|(index, unit)| unit.is_alive().then_some(index))
                .collect();

            let mut round = rounds_fought;
            let mut remaining = survivors.len();
            for index in survivors {
                round += 1;
                remaining -= 1;

                let living: Vec<&BattleUnit> =
                    self.allies.iter().filter(|unit| unit.is_alive()).collect();
                let pick = self.rng.pick_index(living.len());
                let actor = living[pick].name.clone();
                let living_allies = living.len() as u32;

                let damage = enemies[index].hp;
                enemies[index].hp = 0;

                let action = BattleAction {
                    actor,
                    skill: "Heroic Surge".into(),
                    target: enemies[index].name.clone(),
                    damage,
                    is_critical: true,
                    is_healing: false,
                    message: Some("A surge of power delivers the finishing blow!".into()),
                };
                self.log
                    .round(round, vec![action], living_allies, remaining as u32);
            }
        }

        if !self.success && allies_alive {
            self.log
                .system_message("A hidden trap is sprung as the dust settles!");

            let drained: i64 = self
                .allies
                .iter()
                .filter(|unit| unit.is_alive())
                .map(|unit| unit.hp)
                .sum();
            for ally in &mut self.allies {
                ally.hp = 0;
            }

            let living_enemies = enemies.iter().filter(|unit| unit.is_alive()).count() as u32;
            let action = BattleAction {
                actor: TRAP_ACTOR.into(),
                skill: "Hidden Trap".into(),
                target: "All Allies".into(),
                damage: drained,
                is_critical: false,
                is_healing: false,
                message: Some("The floor gives way beneath the party!".into()),
            };
            self.log.round(rounds_fought + 1, vec![action], 0, living_enemies);
        }
    }
}
