//! Multi-stage progression.
//!
//! Drives the round resolver across stages, carrying surviving allies
//! forward by mutation (no healing between stages) and generating a
//! fresh enemy roster per stage. Enemies never persist across stages.

use tracing::warn;

use crate::bestiary::Bestiary;
use crate::combat::{MAX_ROUNDS_PER_STAGE, resolve_round};
use crate::enemy::{self, BASE_PACK_SIZE};
use crate::log::BattleSimulator;
use crate::reconcile::ENEMY_FAILURE_ATTACK_BOOST;
use crate::unit::BattleUnit;

impl<'a, B: Bestiary> BattleSimulator<'a, B> {
    /// Build the enemy roster for a stage, including the failure bias.
    pub(crate) fn generate_stage_enemies(&mut self, stage: u32) -> Vec<BattleUnit> {
        let mut enemies = enemy::generate(
            self.dungeon_level,
            self.element,
            BASE_PACK_SIZE,
            stage,
            self.total_stages,
            &mut self.rng,
            self.bestiary,
        );
        if !self.success {
            for enemy in &mut enemies {
                enemy.scale_attack(ENEMY_FAILURE_ATTACK_BOOST);
            }
        }
        enemies
    }

    /// Run one encounter to a decision or the round cap.
    ///
    /// Emits a `Round` event per resolved round and returns the number
    /// of rounds fought. Zero-action rounds (one side already empty) are
    /// not emitted.
    pub(crate) fn run_encounter(&mut self, enemies: &mut [BattleUnit]) -> u32 {
        let mut rounds_fought = 0;
        for round in 1..=MAX_ROUNDS_PER_STAGE {
            let allies_alive = self.allies.iter().any(BattleUnit::is_alive);
            let enemies_alive = enemies.iter().any(BattleUnit::is_alive);
            if !allies_alive || !enemies_alive {
                break;
            }

            let outcome = resolve_round(&mut self.allies, enemies, &mut self.rng);
            rounds_fought = round;
            self.log.round(
                round,
                outcome.actions,
                outcome.living_allies as u32,
                outcome.living_enemies as u32,
            );

            if outcome.living_allies == 0 || outcome.living_enemies == 0 {
                break;
            }
        }
        rounds_fought
    }

    /// Drive stages 1..=total sequentially; returns stages completed.
    ///
    /// Stage 1 reuses the opening roster so the `battle_start` event and
    /// the first stage's combat stay consistent. A party wipe halts
    /// progression with a defeat note; a stalemate (round cap exhausted
    /// with both sides alive) freezes progression without completing the
    /// stage.
    pub(crate) fn run_stages(&mut self, opening_enemies: Vec<BattleUnit>) -> u32 {
        let mut stages_completed = 0;
        let mut opening = Some(opening_enemies);

        for stage in 1..=self.total_stages {
            let mut enemies = match opening.take() {
                Some(roster) => roster,
                None => self.generate_stage_enemies(stage),
            };

            self.log.stage_start(stage, &enemies);
            self.run_encounter(&mut enemies);

            let allies_alive = self.allies.iter().any(BattleUnit::is_alive);
            let enemies_alive = enemies.iter().any(BattleUnit::is_alive);

            if !allies_alive {
                self.party_wiped = true;
                self.log.system_message(format!(
                    "The party has fallen on stage {stage}. The dungeon claims another expedition."
                ));
                break;
            }

            if enemies_alive {
                warn!(
                    stage,
                    rounds = MAX_ROUNDS_PER_STAGE,
                    "stage ended in stalemate; freezing progression"
                );
                break;
            }

            stages_completed += 1;
            let survivors: Vec<BattleUnit> = self
                .allies
                .iter()
                .filter(|unit| unit.is_alive())
                .cloned()
                .collect();
            self.log.stage_complete(stage, &survivors);
        }

        stages_completed
    }
}
