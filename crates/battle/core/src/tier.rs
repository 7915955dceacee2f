//! Enemy strength tiers.
//!
//! Tiers are assigned positionally within a stage's roster and drive a
//! unit's strength multiplier, display name annotation, and skill
//! unlocks through a single lookup table. Keeping all three decisions on
//! one table avoids the multiplier/name/skill logic drifting apart.

/// Strength tier of a generated enemy.
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
pub enum UnitTier {
    #[default]
    Regular,
    Elite,
    StageBoss,
    FinalBoss,
}

/// Static balance data for one tier.
#[derive(Clone, Copy, Debug)]
pub struct TierProfile {
    /// Applied to every base stat of the unit.
    pub strength_multiplier: f64,
    /// Whether units of this tier carry an advanced skill.
    pub unlock_advanced: bool,
    /// Whether units of this tier carry an ultimate skill.
    pub unlock_ultimate: bool,
}

impl UnitTier {
    /// Balance profile for this tier.
    ///
    /// Multipliers cascade upward: regular x1.0, elite x1.5, stage boss
    /// x1.8, final boss x2.2. Elites and above unlock the advanced
    /// skill; bosses also unlock the ultimate.
    pub const fn profile(self) -> TierProfile {
        match self {
            UnitTier::Regular => TierProfile {
                strength_multiplier: 1.0,
                unlock_advanced: false,
                unlock_ultimate: false,
            },
            UnitTier::Elite => TierProfile {
                strength_multiplier: 1.5,
                unlock_advanced: true,
                unlock_ultimate: false,
            },
            UnitTier::StageBoss => TierProfile {
                strength_multiplier: 1.8,
                unlock_advanced: true,
                unlock_ultimate: true,
            },
            UnitTier::FinalBoss => TierProfile {
                strength_multiplier: 2.2,
                unlock_advanced: true,
                unlock_ultimate: true,
            },
        }
    }

    /// Positional tier assignment within a stage roster.
    ///
    /// The last unit of the final stage is the final boss; the last unit
    /// of any other stage is a stage boss. Past the halfway point of the
    /// dungeon the second-to-last unit is promoted to elite. Everyone
    /// else is regular.
    pub fn assign(index: usize, unit_count: usize, current_stage: u32, total_stages: u32) -> Self {
        let is_last = index + 1 == unit_count;
        if is_last && current_stage == total_stages {
            return UnitTier::FinalBoss;
        }
        if is_last {
            return UnitTier::StageBoss;
        }

        let progress = f64::from(current_stage) / f64::from(total_stages);
        if progress > 0.5 && unit_count >= 2 && index + 2 == unit_count {
            return UnitTier::Elite;
        }

        UnitTier::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_unit_of_final_stage_is_final_boss() {
        assert_eq!(UnitTier::assign(2, 3, 3, 3), UnitTier::FinalBoss);
    }

    #[test]
    fn last_unit_of_earlier_stage_is_stage_boss() {
        assert_eq!(UnitTier::assign(2, 3, 1, 3), UnitTier::StageBoss);
        assert_eq!(UnitTier::assign(1, 2, 2, 3), UnitTier::StageBoss);
    }

    #[test]
    fn second_to_last_is_elite_past_halfway() {
        // Stage 1 of 3: 33% progress, no elite yet.
        assert_eq!(UnitTier::assign(1, 3, 1, 3), UnitTier::Regular);
        // Stage 2 of 3: 66% progress, elite promoted.
        assert_eq!(UnitTier::assign(1, 3, 2, 3), UnitTier::Elite);
    }

    #[test]
    fn multipliers_cascade() {
        assert!(
            UnitTier::FinalBoss.profile().strength_multiplier
                > UnitTier::StageBoss.profile().strength_multiplier
        );
        assert!(
            UnitTier::StageBoss.profile().strength_multiplier
                > UnitTier::Elite.profile().strength_multiplier
        );
        assert_eq!(UnitTier::Regular.profile().strength_multiplier, 1.0);
    }
}
