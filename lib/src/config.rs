//! World configuration.

use crate::{
    cadence::Cadence,
    error::Error,
    grid::Age,
    palette::{PaletteSettings, Selection},
    rules::{select_preset, Life, RuleSet},
    world::World,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The smallest number of bits per age.
pub const MIN_RESOLUTION: u32 = 1;

/// The largest number of bits per age.
pub const MAX_RESOLUTION: u32 = 20;

/// The smallest width or height of a world.
pub const MIN_SIZE: usize = 5;

/// The largest width or height.
pub const MAX_SIZE: usize = 600;

/// The age limit for a resolution: `2^resolution - 1`.
pub fn age_limit(resolution: u32) -> Result<Age, Error> {
    if (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
        Ok((1 << resolution) - 1)
    } else {
        Err(Error::ResolutionOutOfRange(resolution))
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 64)]
    pub width: usize,

    /// Height.
    #[educe(Default = 48)]
    pub height: usize,

    /// Bits per age.
    ///
    /// Ages saturate at `2^resolution - 1`.
    #[educe(Default = 4)]
    pub resolution: u32,

    /// Whether neighbors count only when their ages are in the age sets.
    pub age_weighted: bool,

    /// The rule string, in `B/S` notation.
    ///
    /// Ignored when [`preset`](#structfield.preset) is set.
    #[educe(Default(expression = "String::from(\"B24/S456\")"))]
    pub rule_string: String,

    /// A numbered rule preset.
    pub preset: Option<usize>,

    /// Which palette to use.
    pub palette: Selection,

    /// Whether to reverse the palette.
    #[educe(Default = true)]
    pub reverse_palette: bool,

    /// Whether to tint the dead color under `B0` rules.
    #[educe(Default = true)]
    pub flicker_reduction: bool,

    /// Frames per second of the display.
    #[educe(Default = 10)]
    pub fps: u32,

    /// The world advances one generation every this many frames.
    #[educe(Default = 4)]
    pub frames_per_step: u32,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the bits per age.
    pub fn set_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets whether the rule is age-weighted.
    pub fn set_age_weighted(mut self, age_weighted: bool) -> Self {
        self.age_weighted = age_weighted;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the rule preset.
    pub fn set_preset(mut self, preset: Option<usize>) -> Self {
        self.preset = preset;
        self
    }

    /// Sets the palette.
    pub fn set_palette<T: Into<Selection>>(mut self, palette: T) -> Self {
        self.palette = palette.into();
        self
    }

    /// Sets whether to reverse the palette.
    pub fn set_reverse_palette(mut self, reverse_palette: bool) -> Self {
        self.reverse_palette = reverse_palette;
        self
    }

    /// Sets whether to tint the dead color under `B0` rules.
    pub fn set_flicker_reduction(mut self, flicker_reduction: bool) -> Self {
        self.flicker_reduction = flicker_reduction;
        self
    }

    /// Sets the frames per second.
    pub fn set_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Sets how many frames a generation lasts.
    pub fn set_frames_per_step(mut self, frames_per_step: u32) -> Self {
        self.frames_per_step = frames_per_step;
        self
    }

    /// The age limit, `2^resolution - 1`.
    pub fn age_limit(&self) -> Result<Age, Error> {
        age_limit(self.resolution)
    }

    /// The initial rule.
    ///
    /// In age-weighted mode, a rule given by its rule string starts
    /// with every age counting.
    pub fn rule(&self) -> Result<RuleSet, Error> {
        match self.preset {
            Some(index) => select_preset(index, self.age_weighted),
            None => {
                let life: Life = self.rule_string.parse()?;
                Ok(RuleSet::from(life).with_age_weighting(self.age_weighted, self.age_limit()?))
            }
        }
    }

    /// The palette settings.
    pub fn palette_settings(&self) -> PaletteSettings {
        PaletteSettings {
            selection: self.palette.clone(),
            reverse: self.reverse_palette,
            flicker_reduction: self.flicker_reduction,
        }
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the size, the resolution, the rule
    /// or the palette is invalid.
    pub fn world(&self) -> Result<World, Error> {
        World::new(
            self.width,
            self.height,
            self.resolution,
            self.rule()?,
            self.palette_settings(),
        )
    }

    /// The pacing of generations, initially paused.
    pub fn cadence(&self) -> Result<Cadence, Error> {
        Cadence::new(self.frames_per_step)
    }
}
