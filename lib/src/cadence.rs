//! Pacing of generations against display frames.

use crate::error::Error;

/// Decides on which frames the world advances.
///
/// The display runs at a fixed frame rate; while running, one generation
/// is computed every `frames_per_step` frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    frames_per_step: u32,
    frame: u64,
    running: bool,
}

impl Cadence {
    /// A paused cadence.
    pub fn new(frames_per_step: u32) -> Result<Self, Error> {
        if frames_per_step == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Cadence {
            frames_per_step,
            frame: 0,
            running: false,
        })
    }

    pub fn frames_per_step(&self) -> u32 {
        self.frames_per_step
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Pauses a running cadence, resumes a paused one.
    ///
    /// Returns whether it is running afterwards.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Counts a frame. Returns whether the world should advance on it.
    pub fn tick(&mut self) -> bool {
        let due = self.running && self.frame % self.frames_per_step as u64 == 0;
        self.frame += 1;
        due
    }
}
