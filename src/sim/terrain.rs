//! Procedural terrain height-field
//!
//! Control points are placed on a fixed grid, jittered within a band around
//! the baseline, then densely sampled with a small sinusoidal bump so the
//! ground reads as rolling hills instead of straight ramps. Local maxima of
//! the control grid are recorded as checkpoints and seed coin placement.
//!
//! Generated once per run and immutable afterwards; `get_height` is the only
//! thing the rest of the simulation needs from it.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::BUMP_CYCLES;
use crate::lerp;
use crate::tuning::Tuning;

/// Immutable ground height-field over `[0, width)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    width: f32,
    /// Samples ordered by strictly increasing x, fixed spacing
    points: Vec<Vec2>,
    /// Control-grid local maxima (y-down: lower y than both lookback neighbors)
    checkpoints: Vec<Vec2>,
}

/// Peak rule on the control grid, 2-point lookback (y-down coordinates).
///
/// Unlucky draws can yield zero peaks over the whole terrain; coin placement
/// then falls back entirely to random sites. That is accepted behavior.
#[inline]
fn is_peak(prev2_y: f32, prev1_y: f32, next_y: f32) -> bool {
    prev1_y < prev2_y && prev1_y < next_y
}

impl Terrain {
    /// Generate a height-field from a validated tuning and a seeded RNG
    pub fn generate(tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let baseline = tuning.baseline_height;
        let num_controls = (tuning.world_width / tuning.control_spacing) as usize + 1;

        let mut controls: Vec<Vec2> = Vec::with_capacity(num_controls);
        let mut checkpoints = Vec::new();
        for i in 0..num_controls {
            let y = if i == 0 {
                baseline
            } else {
                let jittered =
                    baseline + rng.random_range(-tuning.height_variation..=tuning.height_variation);
                jittered.clamp(baseline / 2.0, baseline * 1.5)
            };
            if i >= 2 && is_peak(controls[i - 2].y, controls[i - 1].y, y) {
                checkpoints.push(controls[i - 1]);
            }
            controls.push(Vec2::new(i as f32 * tuning.control_spacing, y));
        }

        let mut points = Vec::new();
        for pair in controls.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let segments = ((b.x - a.x) / tuning.segment_length) as usize;
            for j in 0..segments {
                let t = j as f32 / segments as f32;
                // Bounded micro-bump, independently scaled per sample
                let bump = (t * PI * BUMP_CYCLES).sin() * tuning.bump_amplitude * rng.random::<f32>();
                points.push(Vec2::new(
                    a.x + j as f32 * tuning.segment_length,
                    lerp(a.y, b.y, t) + bump,
                ));
            }
        }

        Self {
            width: tuning.world_width,
            points,
            checkpoints,
        }
    }

    /// Ground elevation at horizontal position `x`
    ///
    /// Clamps to the boundary sample outside `[first.x, last.x]`, linearly
    /// interpolates within the bracketing sample pair otherwise. Binary
    /// search over the sorted samples; semantics match a linear scan.
    pub fn get_height(&self, x: f32) -> f32 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            // Unreachable after tuning validation, but never panic on a query
            _ => return 0.0,
        };
        if x < first.x {
            return first.y;
        }
        // First index with sample.x > x; i >= 1 since x >= first.x
        let i = self.points.partition_point(|p| p.x <= x);
        if i >= self.points.len() {
            return last.y;
        }
        let p1 = self.points[i - 1];
        let p2 = self.points[i];
        if p2.x == p1.x {
            return p1.y;
        }
        let t = (x - p1.x) / (p2.x - p1.x);
        lerp(p1.y, p2.y, t)
    }

    /// Ordered `(x, y)` samples, for the renderer
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Control-grid peaks recorded during generation
    pub fn checkpoints(&self) -> &[Vec2] {
        &self.checkpoints
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Build a terrain directly from samples (test scenarios only)
    #[cfg(test)]
    pub(crate) fn from_points(points: Vec<Vec2>, width: f32) -> Self {
        Self {
            width,
            points,
            checkpoints: Vec::new(),
        }
    }
}
