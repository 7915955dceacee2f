//! Elemental affinities.

/// Elemental affinity shared by dungeons, generated enemies, and aura
/// bonuses. The dungeon's element selects the bestiary tables used for
/// enemy names and skills.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    Ice,
    Nature,
    Shadow,
    Arcane,
    /// Fallback for dungeons without a meaningful affinity.
    #[default]
    Neutral,
}
