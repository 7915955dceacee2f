//! Engine error types.

/// Errors surfaced by battle-log generation.
///
/// These only occur for malformed input; every well-formed run produces
/// a log, including the soft-failure log for an empty ally roster.
/// Callers should treat any of these as a data-integrity bug upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("dungeon run must have at least one stage")]
    NoStages,

    #[error("dungeon level must be at least 1")]
    InvalidDungeonLevel,
}
