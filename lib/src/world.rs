//! The world.

use crate::{
    config::{age_limit, MAX_SIZE, MIN_SIZE},
    error::Error,
    grid::{Age, Coord, Grid, DEAD},
    palette::{Palette, PaletteSettings, Selection},
    rules::{self, AgeSet, Rule, RuleSet},
};
use log::debug;
use rand::Rng;
use std::mem;

/// Computes the next generation.
///
/// Each cell looks at the 3×3 block centered on itself, clipped at the
/// edges of the grid; there is no wraparound. The cell itself is part of
/// the block, so a living cell counts toward its own tally.
pub fn step(grid: &Grid, rule: &RuleSet) -> Grid {
    let mut next = grid.clone();
    step_into(grid, rule, &mut next);
    next
}

/// Writes the next generation of `grid` into `next`.
fn step_into(grid: &Grid, rule: &RuleSet, next: &mut Grid) {
    if !grid.same_shape(next) || grid.age_limit() != next.age_limit() {
        *next = grid.clone();
    }
    match rule {
        RuleSet::Plain(life) => evolve(grid, life, next),
        RuleSet::AgeWeighted(rule) => evolve(grid, rule, next),
    }
}

fn evolve<R: Rule>(grid: &Grid, rule: &R, next: &mut Grid) {
    let (width, height) = (grid.width(), grid.height());
    let age_limit = grid.age_limit();
    let life = rule.life();
    let cells = grid.cells();
    let out = next.cells_mut();

    for y in 0..height {
        let rows = y.saturating_sub(1)..=(y + 1).min(height - 1);
        for x in 0..width {
            let (left, right) = (x.saturating_sub(1), (x + 1).min(width - 1));
            let mut birth_count = 0;
            let mut survive_count = 0;
            for ny in rows.clone() {
                for &age in &cells[ny * width + left..=ny * width + right] {
                    if age == DEAD {
                        continue;
                    }
                    if rule.counts_for_birth(age) {
                        birth_count += 1;
                    }
                    if rule.counts_for_survival(age) {
                        survive_count += 1;
                    }
                }
            }
            let i = y * width + x;
            out[i] = life.next_age(cells[i], birth_count, survive_count, age_limit);
        }
    }
}

/// The state of the automaton: the grid, the rule, and how to color it.
///
/// Every method that can fail checks its input before touching anything,
/// so the world is unchanged when it returns an error.
#[derive(Clone, Debug)]
pub struct World {
    /// The current rule.
    rule: RuleSet,

    /// The current generation.
    grid: Grid,

    /// Where the next generation is written before being swapped in.
    scratch: Grid,

    /// Bits per age. The age limit is `2^resolution - 1`.
    resolution: u32,

    palette_settings: PaletteSettings,

    /// Derived from `palette_settings`, the age limit and the rule.
    palette: Palette,

    /// Number of steps since the last seed or clear.
    generation: u64,
}

impl World {
    /// Creates an empty world.
    ///
    /// Both dimensions must lie in `MIN_SIZE..=MAX_SIZE`.
    pub fn new(
        width: usize,
        height: usize,
        resolution: u32,
        rule: RuleSet,
        palette_settings: PaletteSettings,
    ) -> Result<Self, Error> {
        let size_range = MIN_SIZE..=MAX_SIZE;
        if !size_range.contains(&width) || !size_range.contains(&height) {
            return Err(Error::SizeOutOfRange(width, height));
        }
        let age_limit = age_limit(resolution)?;
        let grid = Grid::new(width, height, age_limit)?;
        let palette = Palette::derive(&palette_settings, age_limit, rule.has_b0())?;
        Ok(World {
            rule,
            scratch: grid.clone(),
            grid,
            resolution,
            palette_settings,
            palette,
            generation: 0,
        })
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        step_into(&self.grid, &self.rule, &mut self.scratch);
        mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
    }

    /// Advances `n` generations.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &RuleSet {
        &self.rule
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_settings(&self) -> &PaletteSettings {
        &self.palette_settings
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The maximal age, `2^resolution - 1`.
    pub fn age_limit(&self) -> Age {
        self.grid.age_limit()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_age_weighted(&self) -> bool {
        self.rule.is_age_weighted()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Kills a living cell, or brings a dead cell to life.
    pub fn toggle_cell(&mut self, coord: Coord) -> Result<Age, Error> {
        self.grid.toggle(coord)
    }

    /// Sets the age of a cell.
    pub fn set_cell(&mut self, coord: Coord, age: Age) -> Result<(), Error> {
        self.grid.set(coord, age)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Replaces the grid with the pattern centered in an empty grid.
    pub fn seed<P: AsRef<[Age]>>(&mut self, pattern: &[P]) -> Result<(), Error> {
        self.grid = Grid::from_pattern(pattern, self.width(), self.height(), self.age_limit())?;
        self.generation = 0;
        Ok(())
    }

    /// Changes the size of the grid, keeping the top-left overlap.
    ///
    /// Both dimensions are clamped to `MIN_SIZE..=MAX_SIZE`.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), Error> {
        let width = width.clamp(MIN_SIZE, MAX_SIZE);
        let height = height.clamp(MIN_SIZE, MAX_SIZE);
        self.grid = self.grid.resize(width, height)?;
        self.scratch = self.grid.clone();
        debug!("Resized to {}x{}", width, height);
        Ok(())
    }

    /// Replaces the rule, recomputing the palette if necessary.
    pub fn set_rule(&mut self, rule: RuleSet) -> Result<(), Error> {
        if rule.has_b0() != self.rule.has_b0() {
            self.palette = Palette::derive(&self.palette_settings, self.age_limit(), rule.has_b0())?;
        }
        self.rule = rule;
        Ok(())
    }

    /// Selects a numbered preset for the current mode.
    pub fn select_preset(&mut self, index: usize) -> Result<(), Error> {
        let rule = rules::select_preset(index, self.is_age_weighted())?;
        self.set_rule(rule)
    }

    /// Replaces the rule with a random one in the current mode.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Error> {
        let rule = rules::randomize(rng, self.is_age_weighted());
        self.set_rule(rule)
    }

    /// Switches between plain and age-weighted mode.
    pub fn set_age_weighted(&mut self, age_weighted: bool) -> Result<(), Error> {
        let rule = self
            .rule
            .clone()
            .with_age_weighting(age_weighted, self.age_limit());
        self.set_rule(rule)
    }

    /// Toggles a birth count. Returns whether it is now in the birth set.
    pub fn toggle_birth(&mut self, count: u8) -> Result<bool, Error> {
        if count != 0 {
            return self.rule.toggle_birth(count);
        }
        // Toggling `B0` changes the dead color.
        let palette = Palette::derive(&self.palette_settings, self.age_limit(), !self.rule.has_b0())?;
        let present = self.rule.toggle_birth(count)?;
        self.palette = palette;
        Ok(present)
    }

    /// Toggles a survival count. Returns whether it is now in the survival set.
    pub fn toggle_survive(&mut self, count: u8) -> Result<bool, Error> {
        self.rule.toggle_survive(count)
    }

    /// Toggles a birth age. Returns whether it is now in the birth-age set.
    pub fn toggle_birth_age(&mut self, age: Age) -> Result<bool, Error> {
        self.check_age(age)?;
        self.rule.toggle_birth_age(age)
    }

    /// Toggles a survival age. Returns whether it is now in the survive-age set.
    pub fn toggle_survive_age(&mut self, age: Age) -> Result<bool, Error> {
        self.check_age(age)?;
        self.rule.toggle_survive_age(age)
    }

    fn check_age(&self, age: Age) -> Result<(), Error> {
        if age == DEAD || age > self.age_limit() {
            Err(Error::AgeOutOfRange(age))
        } else {
            Ok(())
        }
    }

    fn set_palette_settings(&mut self, settings: PaletteSettings) -> Result<(), Error> {
        self.palette = Palette::derive(&settings, self.age_limit(), self.rule.has_b0())?;
        self.palette_settings = settings;
        Ok(())
    }

    /// Selects a palette.
    pub fn set_palette(&mut self, selection: Selection) -> Result<(), Error> {
        let settings = PaletteSettings {
            selection,
            ..self.palette_settings.clone()
        };
        self.set_palette_settings(settings)
    }

    /// Sets whether to reverse the palette.
    pub fn set_reverse_palette(&mut self, reverse: bool) -> Result<(), Error> {
        let settings = PaletteSettings {
            reverse,
            ..self.palette_settings.clone()
        };
        self.set_palette_settings(settings)
    }

    /// Sets whether to tint the dead color under `B0` rules.
    pub fn set_flicker_reduction(&mut self, flicker_reduction: bool) -> Result<(), Error> {
        let settings = PaletteSettings {
            flicker_reduction,
            ..self.palette_settings.clone()
        };
        self.set_palette_settings(settings)
    }

    /// Changes the number of bits per age.
    ///
    /// Cells older than the new limit are capped. In age-weighted mode
    /// both age sets are reset to every age up to the new limit.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), Error> {
        let limit = age_limit(resolution)?;
        let palette = Palette::derive(&self.palette_settings, limit, self.rule.has_b0())?;
        self.grid.set_age_limit(limit)?;
        self.scratch = self.grid.clone();
        if let RuleSet::AgeWeighted(rule) = &mut self.rule {
            rule.birth_age = AgeSet::full(limit);
            rule.survive_age = AgeSet::full(limit);
        }
        self.resolution = resolution;
        self.palette = palette;
        debug!("Resolution {} bits, age limit {}", resolution, limit);
        Ok(())
    }
}
