//! Numbered rule presets.
//!
//! Presets are selected by number keys, so there are at most ten of each kind.

use super::{
    age::{AgeLife, RuleSet},
    life::{Counts, Life},
};
use crate::{error::Error, grid::Age};
use log::debug;

/// A plain preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub rule: Life,
}

/// An age-weighted preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgePreset {
    pub name: &'static str,
    pub life: Life,
    pub birth_age: &'static [Age],
    pub survive_age: &'static [Age],
}

impl AgePreset {
    /// The rule of this preset.
    pub fn rule(&self) -> AgeLife {
        AgeLife::new(
            self.life,
            self.birth_age.iter().copied().collect(),
            self.survive_age.iter().copied().collect(),
        )
    }
}

const fn life(birth: &[u8], survive: &[u8]) -> Life {
    Life::new(Counts::new(birth), Counts::new(survive))
}

/// Plain presets.
///
/// Remember that the neighbor count includes the cell itself:
/// `B3/S23` here is not the textbook Game of Life.
pub static PRESETS: [Preset; 10] = [
    Preset {
        name: "Conway's Life",
        rule: life(&[3], &[2, 3]),
    },
    Preset {
        name: "B08/S34678",
        rule: life(&[0, 8], &[3, 4, 6, 7, 8]),
    },
    Preset {
        name: "HighLife",
        rule: life(&[3, 6], &[2, 3]),
    },
    Preset {
        name: "B07/S134",
        rule: life(&[0, 7], &[1, 3, 4]),
    },
    Preset {
        name: "B0/S1357",
        rule: life(&[0], &[1, 3, 5, 7]),
    },
    Preset {
        name: "B125/S356",
        rule: life(&[1, 2, 5], &[3, 5, 6]),
    },
    Preset {
        name: "B24/S456",
        rule: life(&[2, 4], &[4, 5, 6]),
    },
    Preset {
        name: "B056/S19",
        rule: life(&[0, 5, 6], &[1, 9]),
    },
    Preset {
        name: "B345/S234",
        rule: life(&[3, 4, 5], &[2, 3, 4]),
    },
    Preset {
        name: "B1248/S0138",
        rule: life(&[1, 2, 4, 8], &[0, 1, 3, 8]),
    },
];

/// Age-weighted presets, tuned for ages up to 15.
pub static AGE_PRESETS: [AgePreset; 10] = [
    AgePreset {
        name: "Conway's Life, aged",
        life: life(&[3], &[2, 3]),
        birth_age: &[1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        survive_age: &[1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 13, 14, 15],
    },
    AgePreset {
        name: "B08/S34678, aged",
        life: life(&[0, 8], &[3, 4, 6, 7, 8]),
        birth_age: &[1, 2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15],
        survive_age: &[1, 2, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15],
    },
    AgePreset {
        name: "HighLife, aged",
        life: life(&[3, 6], &[2, 3]),
        birth_age: &[1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15],
        survive_age: &[1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15],
    },
    AgePreset {
        name: "B07/S134, aged",
        life: life(&[0, 7], &[1, 3, 4]),
        birth_age: &[1, 2, 3, 4, 5, 6, 8, 9, 10, 12, 13, 14, 15],
        survive_age: &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15],
    },
    AgePreset {
        name: "B0/S1357, aged",
        life: life(&[0], &[1, 3, 5, 7]),
        birth_age: &[1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 13, 14, 15],
        survive_age: &[1, 2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
    },
    AgePreset {
        name: "B125/S356, aged",
        life: life(&[1, 2, 5], &[3, 5, 6]),
        birth_age: &[1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15],
        survive_age: &[1, 2, 3, 4, 5, 7, 8, 9, 10, 12, 13, 14, 15],
    },
    AgePreset {
        name: "B24/S456, aged",
        life: life(&[2, 4], &[4, 5, 6]),
        birth_age: &[1, 2, 3, 4, 5, 6, 8, 9, 11, 12, 13, 14, 15],
        survive_age: &[1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 12, 13, 15],
    },
    AgePreset {
        name: "B056/S19, aged",
        life: life(&[0, 5, 6], &[1, 9]),
        birth_age: &[1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 12, 14, 15],
        survive_age: &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
    },
    AgePreset {
        name: "Game Boy shrinking window",
        life: life(&[0, 1, 2, 3, 7, 8], &[0, 1, 2, 3, 4, 5, 6]),
        birth_age: &[1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        survive_age: &[1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    },
    AgePreset {
        name: "Droplets",
        life: life(&[1], &[1, 3, 8]),
        birth_age: &[1, 4, 6, 7, 8, 9, 11, 13, 14, 15],
        survive_age: &[2, 3, 4, 5, 6, 7, 8, 11, 12, 14],
    },
];

/// The name of a preset, in the given mode.
pub fn preset_name(index: usize, age_weighted: bool) -> Option<&'static str> {
    if age_weighted {
        AGE_PRESETS.get(index).map(|preset| preset.name)
    } else {
        PRESETS.get(index).map(|preset| preset.name)
    }
}

/// Selects a preset by number.
///
/// In age-weighted mode all four sets come from [`AGE_PRESETS`].
/// Otherwise the rule is the plain preset; a later switch into age-weighted
/// mode then starts with every age counting
/// (see [`RuleSet::with_age_weighting`]).
pub fn select_preset(index: usize, age_weighted: bool) -> Result<RuleSet, Error> {
    let rule = if age_weighted {
        AGE_PRESETS
            .get(index)
            .ok_or(Error::UnknownPreset(index))?
            .rule()
            .into()
    } else {
        PRESETS.get(index).ok_or(Error::UnknownPreset(index))?.rule.into()
    };
    debug!("Selected preset {}: {}", index, rule);
    Ok(rule)
}
