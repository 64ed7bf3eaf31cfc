//! Per-wheel spring-damper suspension
//!
//! Explicit forward-Euler with unit mass and unit timestep: the computed
//! force is applied directly as a velocity delta once per tick. The default
//! constants (spring 0.3, damping 0.6) are tuned for this exact scheme at
//! the fixed tick rate; swapping in an implicit integrator without
//! re-deriving them will change the ride.

use super::state::Wheel;
use crate::consts::GROUND_BOUNCE;

/// Integrate one suspension step against the ground height under the wheel
///
/// `ground_y` is the terrain elevation at the wheel's x (y-down). The wheel
/// center may never end a tick below its rest position on the ground.
pub fn integrate(wheel: &mut Wheel, ground_y: f32) {
    wheel.prev_y = wheel.y;

    // Wheel-center y at zero compression
    let rest = ground_y - wheel.radius;

    let displacement = rest - wheel.y;
    let spring_force = displacement * wheel.spring_strength;
    let damping_force = wheel.velocity_y * wheel.damping;

    wheel.velocity_y += spring_force - damping_force;
    wheel.y += wheel.velocity_y;

    // Ground clamp with attenuated bounce
    if wheel.y > rest {
        wheel.y = rest;
        wheel.velocity_y *= GROUND_BOUNCE;
    }

    // For suspension visualization only
    wheel.compression = displacement.clamp(0.0, wheel.suspension_height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn test_wheel() -> Wheel {
        Wheel::new(20.0, &Tuning::default())
    }

    #[test]
    fn test_settles_at_rest_on_flat_ground() {
        let mut wheel = test_wheel();
        let ground = 300.0;
        for _ in 0..300 {
            integrate(&mut wheel, ground);
        }
        let rest = ground - wheel.radius;
        assert!((wheel.y - rest).abs() < 0.5, "y = {}", wheel.y);
        assert!(wheel.velocity_y.abs() < 0.1);
    }

    #[test]
    fn test_never_ends_tick_below_ground() {
        let mut wheel = test_wheel();
        let ground = 300.0;
        let rest = ground - wheel.radius;
        // Slam it downward repeatedly; the clamp must always engage
        for _ in 0..100 {
            wheel.velocity_y += 50.0;
            integrate(&mut wheel, ground);
            assert!(wheel.y <= rest + 1e-4, "penetrated: y = {}", wheel.y);
        }
    }

    #[test]
    fn test_ground_clamp_attenuates_and_inverts_velocity() {
        let mut wheel = test_wheel();
        let ground = 300.0;
        let rest = ground - wheel.radius;
        wheel.y = rest - 1.0;
        wheel.velocity_y = 40.0; // moving down hard

        // Reproduce the pre-clamp velocity the integrator computes
        let displacement = rest - wheel.y;
        let expected_pre_clamp = wheel.velocity_y
            + displacement * wheel.spring_strength
            - wheel.velocity_y * wheel.damping;

        integrate(&mut wheel, ground);
        assert_eq!(wheel.y, rest);
        assert!((wheel.velocity_y - expected_pre_clamp * GROUND_BOUNCE).abs() < 1e-4);
    }

    #[test]
    fn test_prev_y_tracks_last_position() {
        let mut wheel = test_wheel();
        wheel.y = 123.0;
        integrate(&mut wheel, 300.0);
        assert_eq!(wheel.prev_y, 123.0);
    }

    #[test]
    fn test_compression_bounded_by_suspension_height() {
        let mut wheel = test_wheel();
        let ground = 300.0;
        // Far above rest (y-down): displacement large positive, saturates
        wheel.y = ground - wheel.radius - 500.0;
        integrate(&mut wheel, ground);
        assert_eq!(wheel.compression, wheel.suspension_height);

        // Below rest: negative displacement clamps to zero
        let mut wheel = test_wheel();
        wheel.y = ground - wheel.radius + 500.0;
        integrate(&mut wheel, ground);
        assert_eq!(wheel.compression, 0.0);
    }
}
