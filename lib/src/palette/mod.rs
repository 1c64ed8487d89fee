//! Colors of the cells.
//!
//! A [`Palette`] maps ages to colors: index `i` is the color of age `i + 1`,
//! and older cells reuse the last color. It is always derived from a
//! [`Selection`] and a few settings by [`derive_palette`], never edited.

mod catalog;

use crate::{error::Error, grid::Age};
use educe::Educe;
use log::{debug, info};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

pub use catalog::{CatalogEntry, Colors, GRADIENT_INDEX, PALETTES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// A color from its `0xRRGGBB` value.
    pub const fn hex(value: u32) -> Self {
        Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Parses a color like `"FF8000"` or `"#ff8000"`.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_owned()));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb::hex)
            .map_err(|_| Error::InvalidColor(s.to_owned()))
    }

    /// Multiplies every channel by `factor`, truncating.
    pub fn scale(self, factor: f64) -> Self {
        let channel = |c: u8| (c as f64 * factor).max(0.0) as u8;
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Displays the color as `RRGGBB`.
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The color of dead cells.
pub const DEAD_COLOR: Rgb = Rgb::new(30, 30, 30);

/// The darkest color of the gradient.
pub const GRADIENT_START: Rgb = Rgb::new(0, 20, 0);

/// The middle anchor of the gradient.
pub const ALIVE_COLOR: Rgb = Rgb::new(0, 200, 0);

/// The last anchor of the gradient.
pub const ACCENT_COLOR: Rgb = Rgb::new(200, 100, 0);

/// How much the dead color is darkened under flicker reduction.
pub const FLICKER_DIM: f64 = 0.6;

/// Which palette to use.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Selection {
    /// An index into [`PALETTES`].
    #[educe(Default)]
    Catalog(usize),
    /// A user-supplied list of colors.
    Custom(Vec<Rgb>),
}

impl Selection {
    /// The display name of the palette.
    pub fn name(&self) -> Result<&'static str, Error> {
        match self {
            Selection::Catalog(index) => PALETTES
                .get(*index)
                .map(|entry| entry.name)
                .ok_or(Error::UnknownPalette(*index)),
            Selection::Custom(_) => Ok("Custom"),
        }
    }

    /// The next catalog palette, wrapping around.
    ///
    /// A custom palette is followed by the first catalog palette.
    pub fn next_catalog(&self) -> Self {
        match self {
            Selection::Catalog(index) => Selection::Catalog((index + 1) % PALETTES.len()),
            Selection::Custom(_) => Selection::Catalog(0),
        }
    }
}

impl From<usize> for Selection {
    fn from(index: usize) -> Self {
        Selection::Catalog(index)
    }
}

/// The user-facing palette settings.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaletteSettings {
    /// Which palette to use.
    pub selection: Selection,

    /// Whether to reverse the palette.
    #[educe(Default = true)]
    pub reverse: bool,

    /// Whether to tint the dead color when the rule contains `B0`.
    ///
    /// Under such rules the background blinks every generation;
    /// a dead color close to the youngest living color makes it less harsh.
    #[educe(Default = true)]
    pub flicker_reduction: bool,
}

/// A derived palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    name: &'static str,
    colors: Vec<Rgb>,
    dead: Rgb,
}

impl Palette {
    /// Derives the palette for the current settings.
    ///
    /// See [`derive_palette`].
    pub fn derive(
        settings: &PaletteSettings,
        age_limit: Age,
        birth_has_zero: bool,
    ) -> Result<Self, Error> {
        derive_palette(
            &settings.selection,
            settings.reverse,
            age_limit,
            birth_has_zero,
            settings.flicker_reduction,
        )
    }

    /// The name of the selected palette.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Colors of living cells, youngest first.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The color of dead cells.
    pub fn dead_color(&self) -> Rgb {
        self.dead
    }

    /// The color of a cell of the given age.
    pub fn color(&self, age: Age) -> Rgb {
        if age == 0 {
            return self.dead;
        }
        let index = (age as usize - 1).min(self.colors.len() - 1);
        self.colors[index]
    }
}

/// Derives a palette.
///
/// 1. Takes the base colors of the selection. The procedural gradient
///    is computed for `age_limit`.
/// 2. Reverses them if `reverse` is set.
/// 3. Unless the selection is the gradient, stretches them to
///    `age_limit + 1` colors by [`interpolate`], or truncates them if there
///    are more.
/// 4. Picks the dead color: the first color dimmed by [`FLICKER_DIM`] when
///    the rule contains `B0` and `flicker_reduction` is set, [`DEAD_COLOR`]
///    otherwise.
pub fn derive_palette(
    selection: &Selection,
    reverse: bool,
    age_limit: Age,
    birth_has_zero: bool,
    flicker_reduction: bool,
) -> Result<Palette, Error> {
    let name = selection.name()?;
    let (mut colors, procedural) = match selection {
        Selection::Catalog(index) => match PALETTES[*index].colors {
            Colors::Fixed(colors) => (colors.to_vec(), false),
            Colors::Gradient => (gradient_colors(age_limit), true),
        },
        Selection::Custom(colors) => (colors.clone(), false),
    };
    if colors.is_empty() {
        return Err(Error::EmptyPalette(name.to_owned()));
    }
    if reverse {
        colors.reverse();
    }
    if !procedural {
        colors = interpolate(&colors, age_limit as usize + 1);
    }
    let dead = if birth_has_zero && flicker_reduction {
        colors[0].scale(FLICKER_DIM)
    } else {
        DEAD_COLOR
    };
    info!("Palette {}: {} colors", name, colors.len());
    Ok(Palette { name, colors, dead })
}

/// Stretches a list of colors to `target` colors.
///
/// The `n - 1` gaps between consecutive base colors get `target / (n - 1)`
/// slots each, and the first `target % (n - 1)` gaps one more. Each gap
/// starts exactly at its base color and moves linearly toward the next one,
/// so the last base color itself is dropped.
///
/// If `target` is at most the number of base colors, the list is truncated.
pub fn interpolate(base: &[Rgb], target: usize) -> Vec<Rgb> {
    if target <= base.len() {
        return base[..target].to_vec();
    }
    if base.len() == 1 {
        return vec![base[0]; target];
    }
    let segments = base.len() - 1;
    let (slots, extra) = (target / segments, target % segments);
    debug!(
        "Interpolating {} colors to {}: {} slots per gap",
        base.len(),
        target,
        slots
    );
    let mut colors = Vec::with_capacity(target);
    for (i, pair) in base.windows(2).enumerate() {
        let n = if i < extra { slots + 1 } else { slots };
        let (start, end) = (pair[0], pair[1]);
        let channel = |s: u8, e: u8, j: usize| {
            (s as f64 + (e as f64 - s as f64) * (j as f64 / n as f64)) as u8
        };
        colors.extend((0..n).map(|j| {
            Rgb::new(
                channel(start.r, end.r, j),
                channel(start.g, end.g, j),
                channel(start.b, end.b, j),
            )
        }));
    }
    colors
}

/// A linear gradient of `steps` colors from `start` to `end`, both included.
pub fn gradient(start: Rgb, end: Rgb, steps: usize) -> Vec<Rgb> {
    if steps <= 1 {
        return vec![start; steps];
    }
    let channel = |s: u8, e: u8, i: usize| {
        (s as f64 + ((e as i32 - s as i32) * i as i32) as f64 / (steps - 1) as f64) as u8
    };
    (0..steps)
        .map(|i| {
            Rgb::new(
                channel(start.r, end.r, i),
                channel(start.g, end.g, i),
                channel(start.b, end.b, i),
            )
        })
        .collect()
}

/// The procedural green gradient for the given age limit.
///
/// Dark green to [`ALIVE_COLOR`], then on to [`ACCENT_COLOR`].
pub fn gradient_colors(age_limit: Age) -> Vec<Rgb> {
    let (first, second) = if age_limit <= 15 {
        (8, 7)
    } else {
        let half = age_limit as usize / 2;
        (half, half + 1)
    };
    let mut colors = gradient(GRADIENT_START, ALIVE_COLOR, first);
    colors.extend(gradient(ALIVE_COLOR, ACCENT_COLOR, second).into_iter().skip(1));
    colors
}
