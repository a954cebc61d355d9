//! StatSource - Trait and implementations for stat providers

mod artifact;
mod hero;
mod manual;
mod pet;
mod talent;

pub use artifact::ArtifactSource;
pub use hero::HeroSource;
pub use manual::ManualSource;
pub use pet::PetSource;
pub use talent::TalentSource;

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes stats to a StatBlock
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Build priorities:
    /// - Hero base stats: -100
    /// - Pet: 0
    /// - Artifact: 10
    /// - Talents: 100
    /// - Manual bonuses: 200
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}
