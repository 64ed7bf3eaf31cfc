//! Fixed-timestep driver
//!
//! Frames arrive at whatever rate the embedding layer runs; the clock
//! accumulates wall time and converts it into whole simulation ticks,
//! capped per frame so a long stall cannot trigger a spiral of death.

use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Accumulator converting frame time into fixed simulation ticks
#[derive(Debug, Default)]
pub struct FixedClock {
    accumulator: f32,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the simulation by `frame_dt` seconds of wall time
    ///
    /// Runs up to [`MAX_SUBSTEPS`] ticks; one-shot inputs (`restart`) are
    /// cleared after the first consumed tick so a single key press cannot
    /// fire twice. Returns the number of ticks run.
    pub fn advance(
        &mut self,
        state: &mut GameState,
        input: &mut TickInput,
        frame_dt: f32,
    ) -> u32 {
        self.accumulator += frame_dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, input);
            self.accumulator -= SIM_DT;
            substeps += 1;
            input.restart = false;
        }
        substeps
    }
}
