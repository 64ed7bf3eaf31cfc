//! Data-driven game balance
//!
//! Every physical and generation constant lives here so test scenarios and
//! the headless driver can override them without recompiling. Defaults come
//! from [`crate::consts`]. Validation is fail-fast: a `GameState` is never
//! constructed from a degenerate configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Construction-time configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("world width must be positive, got {0}")]
    WorldWidth(f32),
    #[error("world width {width} is narrower than one control span of {spacing}")]
    WorldTooNarrow { width: f32, spacing: f32 },
    #[error("control spacing must be positive, got {0}")]
    ControlSpacing(f32),
    #[error("segment length must be positive, got {0}")]
    SegmentLength(f32),
    #[error("baseline height must be positive, got {0}")]
    BaselineHeight(f32),
    #[error("height variation must be non-negative, got {0}")]
    HeightVariation(f32),
    #[error("suspension height must be non-negative, got {0}")]
    SuspensionHeight(f32),
    #[error("max speed must be positive, got {0}")]
    MaxSpeed(f32),
    #[error("fuel capacity must be positive, got {0}")]
    FuelCapacity(f32),
    #[error("friction must be in (0, 1], got {0}")]
    Friction(f32),
    #[error("wheel radius must be positive, got {0}")]
    WheelRadius(f32),
    #[error("coin edge margins ({margin} per side) leave no room in a {width} wide world")]
    CoinMargin { width: f32, margin: f32 },
}

/// Tunable simulation parameters
///
/// Serde defaults let an override file specify only the fields it changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // Terrain
    pub world_width: f32,
    pub baseline_height: f32,
    pub control_spacing: f32,
    pub height_variation: f32,
    pub segment_length: f32,
    pub bump_amplitude: f32,

    // Car body
    pub body_width: f32,
    pub body_height: f32,
    pub body_offset_y: f32,
    pub start_x: f32,
    pub start_y: f32,

    // Longitudinal dynamics
    pub max_speed: f32,
    pub throttle_accel: f32,
    pub friction: f32,

    // Fuel
    pub fuel_capacity: f32,
    pub fuel_consumption: f32,

    // Suspension
    pub wheel_radius: f32,
    pub spring_strength: f32,
    pub wheel_damping: f32,
    pub suspension_height: f32,

    // Coins
    pub coin_count: usize,
    pub coin_radius: f32,
    pub coin_edge_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            baseline_height: BASELINE_HEIGHT,
            control_spacing: CONTROL_SPACING,
            height_variation: HEIGHT_VARIATION,
            segment_length: SEGMENT_LENGTH,
            bump_amplitude: BUMP_AMPLITUDE,

            body_width: CAR_WIDTH,
            body_height: CAR_HEIGHT,
            body_offset_y: BODY_OFFSET_Y,
            start_x: CAR_START_X,
            start_y: CAR_START_Y,

            max_speed: MAX_SPEED,
            throttle_accel: THROTTLE_ACCEL,
            friction: FRICTION,

            fuel_capacity: FUEL_CAPACITY,
            fuel_consumption: FUEL_CONSUMPTION,

            wheel_radius: WHEEL_RADIUS,
            spring_strength: SPRING_STRENGTH,
            wheel_damping: WHEEL_DAMPING,
            suspension_height: SUSPENSION_HEIGHT,

            coin_count: COIN_COUNT,
            coin_radius: COIN_RADIUS,
            coin_edge_margin: COIN_EDGE_MARGIN,
        }
    }
}

impl Tuning {
    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.world_width > 0.0) {
            return Err(TuningError::WorldWidth(self.world_width));
        }
        if !(self.control_spacing > 0.0) {
            return Err(TuningError::ControlSpacing(self.control_spacing));
        }
        if self.world_width < self.control_spacing {
            return Err(TuningError::WorldTooNarrow {
                width: self.world_width,
                spacing: self.control_spacing,
            });
        }
        if !(self.segment_length > 0.0) {
            return Err(TuningError::SegmentLength(self.segment_length));
        }
        if !(self.baseline_height > 0.0) {
            return Err(TuningError::BaselineHeight(self.baseline_height));
        }
        // A negative span would invert the terrain jitter sampling range
        if !(self.height_variation >= 0.0) {
            return Err(TuningError::HeightVariation(self.height_variation));
        }
        // A negative height would invert the compression clamp bounds
        if !(self.suspension_height >= 0.0) {
            return Err(TuningError::SuspensionHeight(self.suspension_height));
        }
        if !(self.max_speed > 0.0) {
            return Err(TuningError::MaxSpeed(self.max_speed));
        }
        if !(self.fuel_capacity > 0.0) {
            return Err(TuningError::FuelCapacity(self.fuel_capacity));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(TuningError::Friction(self.friction));
        }
        if !(self.wheel_radius > 0.0) {
            return Err(TuningError::WheelRadius(self.wheel_radius));
        }
        // Random coin fill needs a non-empty x range between the margins
        if self.coin_count > 0 && self.world_width - 2.0 * self.coin_edge_margin <= 0.0 {
            return Err(TuningError::CoinMargin {
                width: self.world_width,
                margin: self.coin_edge_margin,
            });
        }
        Ok(())
    }

    /// Parse a JSON override file (missing fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_validates() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn zero_width_world_rejected() {
        let tuning = Tuning {
            world_width: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::WorldWidth(0.0)));
    }

    #[test]
    fn world_narrower_than_control_span_rejected() {
        let tuning = Tuning {
            world_width: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::WorldTooNarrow { .. })
        ));
    }

    #[test]
    fn nan_width_rejected() {
        let tuning = Tuning {
            world_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::WorldWidth(_))));
    }

    #[test]
    fn negative_height_variation_rejected() {
        let tuning = Tuning {
            height_variation: -10.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::HeightVariation(-10.0)));
        // Zero variation is legal: a perfectly flat control grid
        let tuning = Tuning {
            height_variation: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn negative_suspension_height_rejected() {
        let tuning = Tuning {
            suspension_height: -1.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::SuspensionHeight(-1.0)));
    }

    #[test]
    fn bad_friction_rejected() {
        for friction in [0.0, -0.5, 1.5] {
            let tuning = Tuning {
                friction,
                ..Default::default()
            };
            assert!(matches!(tuning.validate(), Err(TuningError::Friction(_))));
        }
    }

    #[test]
    fn margins_swallowing_world_rejected() {
        let tuning = Tuning {
            world_width: 900.0,
            coin_edge_margin: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::CoinMargin { .. })
        ));
        // No coins requested: margins are irrelevant
        let tuning = Tuning {
            world_width: 900.0,
            coin_edge_margin: 500.0,
            coin_count: 0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Ok(()));
    }

    #[test]
    fn partial_json_override() {
        let tuning = Tuning::from_json(r#"{"max_speed": 14.0, "coin_count": 5}"#).unwrap();
        assert_eq!(tuning.max_speed, 14.0);
        assert_eq!(tuning.coin_count, 5);
        assert_eq!(tuning.friction, Tuning::default().friction);
    }
}
