//! Reading patterns in [RLE](https://conwaylife.com/wiki/Rle) or
//! [Plaintext](https://conwaylife.com/wiki/Plaintext) format.

use crate::{
    error::Error,
    grid::{Pattern, BORN, DEAD},
};
use ca_formats::{plaintext::Plaintext, rle::Rle};
use std::fmt::Display;

fn parse_error<E: Display>(e: E) -> Error {
    Error::ParsePatternError(e.to_string())
}

/// Builds a pattern from the positions of living cells.
///
/// The pattern spans from `(0, 0)` to the farthest cell, and at least
/// `min_size` when given.
fn to_pattern<I, E>(cells: I, min_size: (usize, usize)) -> Result<Pattern, Error>
where
    I: IntoIterator<Item = Result<(i64, i64), E>>,
    E: Display,
{
    let mut coords = Vec::new();
    let (mut width, mut height) = min_size;
    for position in cells {
        let (x, y) = position.map_err(parse_error)?;
        let x = usize::try_from(x).map_err(parse_error)?;
        let y = usize::try_from(y).map_err(parse_error)?;
        width = width.max(x + 1);
        height = height.max(y + 1);
        coords.push((x, y));
    }
    let mut pattern = vec![vec![DEAD; width]; height];
    for (x, y) in coords {
        pattern[y][x] = BORN;
    }
    Ok(pattern)
}

/// Parses a pattern in Plaintext format.
///
/// Lines starting with `!` are comments. `.` is a dead cell; `O` and `*`
/// are newborn cells.
pub fn parse_plaintext(text: &str) -> Result<Pattern, Error> {
    let cells = Plaintext::new(text).map_err(parse_error)?;
    to_pattern(cells, (0, 0))
}

/// Parses a pattern in RLE format.
///
/// The size in the header is kept even when the edges are dead. Every
/// living state is read as a newborn cell.
pub fn parse_rle(text: &str) -> Result<Pattern, Error> {
    let rle = Rle::new(text).map_err(parse_error)?;
    let size = rle
        .header_data()
        .map_or((0, 0), |header| (header.x as usize, header.y as usize));
    let cells = rle.filter_map(|cell| match cell {
        Ok(data) if data.state == 0 => None,
        cell => Some(cell.map(|data| data.position)),
    });
    to_pattern(cells, size)
}

/// Parses a pattern in either format.
///
/// The text is read as RLE when its first line that is not a comment
/// is an RLE header (`x = ...`).
pub fn parse_pattern(text: &str) -> Result<Pattern, Error> {
    let is_rle = text
        .lines()
        .map(str::trim_start)
        .find(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .map_or(false, |line| line.starts_with('x'));
    if is_rle {
        parse_rle(text)
    } else {
        parse_plaintext(text)
    }
}
