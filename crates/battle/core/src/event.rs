//! Battle log events.
//!
//! A battle log is an ordered `Vec<BattleEvent>`; the caller persists it
//! verbatim and replays it without re-simulation. Events serialize as an
//! internally tagged union (`"type"` discriminator, snake_case kinds).

use crate::unit::BattleUnit;

/// One resolved action within a round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub actor: String,
    pub skill: String,
    pub target: String,
    pub damage: i64,
    pub is_critical: bool,
    pub is_healing: bool,
    /// Optional display text for narrative actions.
    pub message: Option<String>,
}

/// A single entry in the battle log.
///
/// Timestamps are deterministic (run creation time plus emission
/// sequence) so that regenerating a log is byte-for-byte reproducible.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum BattleEvent {
    /// Free-form narration: initialization, defeat notes, reconciliation
    /// flavor.
    SystemMessage { timestamp: u64, message: String },
    /// Opening event carrying the full ally and first-stage enemy rosters.
    BattleStart {
        timestamp: u64,
        allies: Vec<BattleUnit>,
        enemies: Vec<BattleUnit>,
    },
    /// One round of combat: all ally actions first, then all enemy actions.
    Round {
        timestamp: u64,
        round: u32,
        actions: Vec<BattleAction>,
        living_allies: u32,
        living_enemies: u32,
    },
    /// A new stage begins with a fresh enemy roster.
    StageStart {
        timestamp: u64,
        stage: u32,
        enemies: Vec<BattleUnit>,
    },
    /// A stage was cleared; carries the surviving allies.
    StageComplete {
        timestamp: u64,
        stage: u32,
        allies: Vec<BattleUnit>,
    },
    /// Final summary.
    BattleEnd {
        timestamp: u64,
        victory: bool,
        completed_stages: u32,
        total_stages: u32,
        reward_multiplier: f64,
        summary: String,
    },
}

impl BattleEvent {
    /// The event's kind tag, matching the serialized `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            BattleEvent::SystemMessage { .. } => "system_message",
            BattleEvent::BattleStart { .. } => "battle_start",
            BattleEvent::Round { .. } => "round",
            BattleEvent::StageStart { .. } => "stage_start",
            BattleEvent::StageComplete { .. } => "stage_complete",
            BattleEvent::BattleEnd { .. } => "battle_end",
        }
    }

    pub fn timestamp(&self) -> u64 {
        match self {
            BattleEvent::SystemMessage { timestamp, .. }
            | BattleEvent::BattleStart { timestamp, .. }
            | BattleEvent::Round { timestamp, .. }
            | BattleEvent::StageStart { timestamp, .. }
            | BattleEvent::StageComplete { timestamp, .. }
            | BattleEvent::BattleEnd { timestamp, .. } => *timestamp,
        }
    }
}
