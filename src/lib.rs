//! Hill Dash - a side-scrolling hill-climb driving simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, suspension, vehicle, coins)
//! - `tuning`: Data-driven game balance with fail-fast validation
//!
//! Rendering, input capture and audio are external collaborators: they feed
//! a [`sim::TickInput`] per tick and read a [`sim::RenderSnapshot`] back.
//! Coordinates are screen-style: x grows rightward, y grows downward, so a
//! terrain "peak" has a numerically *lower* y than its neighbors.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; the integrators assume unit ticks)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Terrain extent and shape
    pub const WORLD_WIDTH: f32 = 10_000.0;
    pub const BASELINE_HEIGHT: f32 = 300.0;
    pub const CONTROL_SPACING: f32 = 200.0;
    pub const HEIGHT_VARIATION: f32 = 100.0;
    pub const SEGMENT_LENGTH: f32 = 5.0;
    pub const BUMP_AMPLITUDE: f32 = 5.0;
    /// Micro-bump oscillations per control span
    pub const BUMP_CYCLES: f32 = 4.0;

    /// Car body defaults
    pub const CAR_WIDTH: f32 = 80.0;
    pub const CAR_HEIGHT: f32 = 40.0;
    pub const CAR_START_X: f32 = 200.0;
    pub const CAR_START_Y: f32 = 300.0;
    pub const BODY_OFFSET_Y: f32 = 10.0;

    /// Longitudinal dynamics
    pub const MAX_SPEED: f32 = 10.0;
    pub const THROTTLE_ACCEL: f32 = 0.2;
    pub const FRICTION: f32 = 0.98;
    /// Below this speed the wheels stop visually spinning
    pub const WHEEL_SPIN_MIN_SPEED: f32 = 0.1;

    /// Fuel model
    pub const FUEL_CAPACITY: f32 = 100.0;
    pub const FUEL_CONSUMPTION: f32 = 0.1;
    pub const FUEL_PER_COIN: f32 = 10.0;
    pub const SCORE_PER_COIN: u32 = 10;

    /// Wheel / suspension defaults (tuned for the explicit unit-step integrator)
    pub const WHEEL_RADIUS: f32 = 15.0;
    pub const SPRING_STRENGTH: f32 = 0.3;
    pub const WHEEL_DAMPING: f32 = 0.6;
    pub const SUSPENSION_HEIGHT: f32 = 20.0;
    /// Velocity retained (and inverted) when a wheel is clamped to the ground
    pub const GROUND_BOUNCE: f32 = -0.3;

    /// Chassis orientation spring
    pub const ANGULAR_SPRING: f32 = 0.1;
    pub const ANGULAR_DAMPING: f32 = 0.1;

    /// Coins
    pub const COIN_RADIUS: f32 = 15.0;
    pub const COIN_COUNT: usize = 20;
    pub const COIN_EDGE_MARGIN: f32 = 500.0;
    pub const COIN_HEIGHT_ABOVE_PEAK: f32 = 50.0;
    pub const COIN_BOB_RATE: f32 = 0.1;
    pub const COIN_BOB_AMPLITUDE: f32 = 3.0;

    /// HUD presentation: 1 world unit = 0.1 m
    pub const METERS_PER_UNIT: f32 = 0.1;
}

/// Shortest signed angular difference `target - current`, normalized to (-π, π]
#[inline]
pub fn shortest_angle_diff(target: f32, current: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let mut diff = target - current;
    while diff > PI {
        diff -= TAU;
    }
    while diff < -PI {
        diff += TAU;
    }
    diff
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
