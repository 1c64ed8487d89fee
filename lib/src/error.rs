//! All kinds of errors in this crate.

use crate::grid::Coord;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Every error is detected before the engine state is touched,
/// so a failed operation leaves the [`World`](crate::World) unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unknown palette: {0}.
    UnknownPalette(usize),
    /// Palette {0:?} has no colors.
    EmptyPalette(String),
    /// Invalid hex color: {0:?}.
    InvalidColor(String),
    /// Unknown rule preset: {0}.
    UnknownPreset(usize),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Pattern of size {pattern_width}x{pattern_height} does not fit in a {width}x{height} grid.
    PatternTooLarge {
        pattern_width: usize,
        pattern_height: usize,
        width: usize,
        height: usize,
    },
    /// Invalid pattern: {0}.
    ParsePatternError(String),
    /// Width and height should be positive.
    NonPositiveError,
    /// Grid size {0}x{1} is out of range.
    SizeOutOfRange(usize, usize),
    /// A {0}x{1} grid cannot hold {2} cells.
    CellCountMismatch(usize, usize, usize),
    /// Age resolution {0} is out of range (1 to 20 bits).
    ResolutionOutOfRange(u32),
    /// Cell at {0:?} is outside the grid.
    SetCellError(Coord),
    /// Age {0} is out of range.
    AgeOutOfRange(u32),
    /// Neighbor count {0} is out of range.
    CountOutOfRange(u8),
    /// Age rules require age-weighted mode.
    NotAgeWeighted,
}
