//! The grid of aging cells.

use crate::error::Error;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed from the top-left corner.
pub type Coord = (usize, usize);

/// The age of a cell.
///
/// `0` means dead. A positive value is the number of consecutive
/// generations the cell has been alive, saturating at the age limit.
pub type Age = u32;

/// The age of a dead cell.
pub const DEAD: Age = 0;

/// The age of a newborn cell.
pub const BORN: Age = 1;

/// A pattern to seed a grid with: rows of ages, top to bottom.
///
/// Rows may have different lengths; missing cells are dead.
pub type Pattern = Vec<Vec<Age>>;

/// A rectangular grid of aging cells.
///
/// Every cell holds an age in `0..=age_limit`. The size is fixed;
/// resizing creates a new grid.
///
/// A deserialized grid is checked like one built by [`Grid::new`], and its
/// cells must match its size and age limit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "GridData")
)]
pub struct Grid {
    width: usize,
    height: usize,
    age_limit: Age,
    /// Row-major ages.
    cells: Vec<Age>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GridData {
    width: usize,
    height: usize,
    age_limit: Age,
    cells: Vec<Age>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = Error;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        if data.width.checked_mul(data.height) != Some(data.cells.len()) {
            return Err(Error::CellCountMismatch(
                data.width,
                data.height,
                data.cells.len(),
            ));
        }
        if let Some(&age) = data.cells.iter().find(|&&age| age > data.age_limit) {
            return Err(Error::AgeOutOfRange(age));
        }
        let mut grid = Grid::new(data.width, data.height, data.age_limit)?;
        grid.cells = data.cells;
        Ok(grid)
    }
}

impl Grid {
    /// Creates a grid of dead cells.
    pub fn new(width: usize, height: usize, age_limit: Age) -> Result<Self, Error> {
        if width == 0 || height == 0 || age_limit == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Grid {
            width,
            height,
            age_limit,
            cells: vec![DEAD; width * height],
        })
    }

    /// Creates a grid with the pattern centered in it.
    ///
    /// The top-left corner of the pattern lands at
    /// `((width - pattern_width) / 2, (height - pattern_height) / 2)`.
    /// Positive ages in the pattern are capped at `age_limit`.
    pub fn from_pattern<P: AsRef<[Age]>>(
        pattern: &[P],
        width: usize,
        height: usize,
        age_limit: Age,
    ) -> Result<Self, Error> {
        let mut grid = Grid::new(width, height, age_limit)?;
        let pattern_height = pattern.len();
        let pattern_width = pattern
            .iter()
            .map(|row| row.as_ref().len())
            .max()
            .unwrap_or(0);
        if pattern_width > width || pattern_height > height {
            return Err(Error::PatternTooLarge {
                pattern_width,
                pattern_height,
                width,
                height,
            });
        }
        let start_x = (width - pattern_width) / 2;
        let start_y = (height - pattern_height) / 2;
        for (dy, row) in pattern.iter().enumerate() {
            let offset = (start_y + dy) * width + start_x;
            for (dx, &age) in row.as_ref().iter().enumerate() {
                grid.cells[offset + dx] = age.min(age_limit);
            }
        }
        Ok(grid)
    }

    /// Width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The maximal age of a cell.
    pub fn age_limit(&self) -> Age {
        self.age_limit
    }

    fn index(&self, (x, y): Coord) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Gets the age of a cell. Returns `None` if there is no such cell.
    pub fn get(&self, coord: Coord) -> Option<Age> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the age of a cell.
    pub fn set(&mut self, coord: Coord, age: Age) -> Result<(), Error> {
        if age > self.age_limit {
            return Err(Error::AgeOutOfRange(age));
        }
        let i = self.index(coord).ok_or(Error::SetCellError(coord))?;
        self.cells[i] = age;
        Ok(())
    }

    /// Kills a living cell, or brings a dead cell to life.
    ///
    /// Returns the new age.
    pub fn toggle(&mut self, coord: Coord) -> Result<Age, Error> {
        let i = self.index(coord).ok_or(Error::SetCellError(coord))?;
        let age = if self.cells[i] == DEAD { BORN } else { DEAD };
        self.cells[i] = age;
        Ok(age)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&age| age > DEAD).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&age| age == DEAD)
    }

    /// The row of ages at height `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not less than the height.
    pub fn row(&self, y: usize) -> &[Age] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Age]> + '_ {
        self.cells.chunks(self.width)
    }

    pub(crate) fn cells(&self) -> &[Age] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Age] {
        &mut self.cells
    }

    /// Whether two grids have the same width and height.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Creates a grid of the new size, keeping the top-left overlap.
    ///
    /// Cells beyond the old bounds start dead; cells beyond the new
    /// bounds are dropped.
    pub fn resize(&self, width: usize, height: usize) -> Result<Grid, Error> {
        let mut grid = Grid::new(width, height, self.age_limit)?;
        let copy_width = self.width.min(width);
        for (old, new) in self.rows().zip(grid.cells.chunks_mut(width)) {
            new[..copy_width].copy_from_slice(&old[..copy_width]);
        }
        Ok(grid)
    }

    /// Changes the age limit, capping the ages of older cells.
    pub fn set_age_limit(&mut self, age_limit: Age) -> Result<(), Error> {
        if age_limit == 0 {
            return Err(Error::NonPositiveError);
        }
        self.age_limit = age_limit;
        for age in self.cells.iter_mut() {
            *age = (*age).min(age_limit);
        }
        Ok(())
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `O`, whatever their ages.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &age in row {
                f.write_str(if age == DEAD { "." } else { "O" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
