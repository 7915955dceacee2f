//! Deterministic battle-log generation for dungeon runs.
//!
//! Given a party of pre-resolved allies and a handful of dungeon
//! parameters, this crate produces a complete, replayable log of combat
//! events (rounds, critical hits, stage transitions, final summary)
//! whose terminal state matches a predetermined success/failure decided
//! by the caller before simulation. The log still reads like an organic
//! battle: disagreements between the simulated result and the required
//! outcome are patched with narrative events, never silently rewritten.
//!
//! The engine is pure and synchronous: no I/O, no global state, and all
//! randomness flows from a per-generation [`BattleRng`]. Enemy flavor is
//! supplied through the [`Bestiary`] trait so content lives outside the
//! engine.
pub mod bestiary;
pub mod combat;
pub mod element;
pub mod enemy;
pub mod error;
pub mod event;
pub mod log;
pub mod reconcile;
pub mod rng;
pub mod run;
pub mod skill;
pub mod stage;
pub mod tier;
pub mod unit;

#[cfg(test)]
pub(crate) mod testing;

pub use bestiary::{Bestiary, SkillTemplate};
pub use combat::{
    BASE_CRIT_CHANCE, CRIT_MULTIPLIER, MAX_CRIT_CHANCE, MAX_DEFENSE_REDUCTION,
    MAX_ROUNDS_PER_STAGE, RoundOutcome, resolve_round,
};
pub use element::Element;
pub use error::SimulationError;
pub use event::{BattleAction, BattleEvent};
pub use log::{EventLog, MIN_REWARD_MULTIPLIER, generate_battle_log};
pub use reconcile::{ALLY_SUCCESS_ATTACK_BOOST, ENEMY_FAILURE_ATTACK_BOOST, TRAP_ACTOR};
pub use rng::{BattleRng, derive_seed};
pub use run::DungeonRun;
pub use skill::{
    BattleSkill, DEFAULT_ADVANCED_COOLDOWN, DEFAULT_ULTIMATE_COOLDOWN, SkillSet, SkillSlot,
};
pub use tier::{TierProfile, UnitTier};
pub use unit::{AuraBonus, BattleUnit, StatusEffect, UnitStats};
