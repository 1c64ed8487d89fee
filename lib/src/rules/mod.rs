//! Cellular automata rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).
//!
//! Neighbor counts in this crate always include the cell itself,
//! so they range from `0` to [`MAX_COUNT`] `= 9`.

mod age;
mod life;
mod presets;
mod random;

use crate::grid::{Age, DEAD};
pub use age::{AgeLife, AgeSet, RuleSet};
pub use life::{Counts, Life, MAX_COUNT};
pub use presets::{preset_name, select_preset, AgePreset, Preset, AGE_PRESETS, PRESETS};
pub use random::{randomize, RANDOM_AGE_LIMIT};

/// A rule that the [`step`](crate::step) function can run.
///
/// A living cell in the neighborhood contributes to the birth count
/// and to the survival count separately, depending on its age.
pub trait Rule {
    /// The birth and survival sets.
    fn life(&self) -> &Life;

    /// Whether a living cell of this age counts toward birth.
    fn counts_for_birth(&self, age: Age) -> bool;

    /// Whether a living cell of this age counts toward survival.
    fn counts_for_survival(&self, age: Age) -> bool;

    /// Whether the rule contains `B0`.
    fn has_b0(&self) -> bool {
        self.life().has_b0()
    }
}

impl Rule for Life {
    fn life(&self) -> &Life {
        self
    }

    #[inline]
    fn counts_for_birth(&self, age: Age) -> bool {
        age > DEAD
    }

    #[inline]
    fn counts_for_survival(&self, age: Age) -> bool {
        age > DEAD
    }
}

impl Rule for AgeLife {
    fn life(&self) -> &Life {
        &self.life
    }

    #[inline]
    fn counts_for_birth(&self, age: Age) -> bool {
        self.birth_age.contains(age)
    }

    #[inline]
    fn counts_for_survival(&self, age: Age) -> bool {
        self.survive_age.contains(age)
    }
}
