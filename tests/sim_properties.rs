//! Property tests for the simulation invariants
//!
//! Random input scripts and query positions; the bounds here are the
//! contract the renderer and HUD rely on every frame.

use hill_dash::Tuning;
use hill_dash::consts::*;
use hill_dash::sim::{GameState, TickInput, tick};
use proptest::prelude::*;

fn input_script() -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(
        (any::<bool>(), any::<bool>()).prop_map(|(gas, brake)| TickInput {
            gas,
            brake,
            restart: false,
        }),
        0..250,
    )
}

proptest! {
    #[test]
    fn fuel_stays_in_range(seed in 0u64..200, script in input_script()) {
        let mut state = GameState::new(seed, Tuning::default()).unwrap();
        for input in &script {
            tick(&mut state, input);
            prop_assert!(state.car.fuel >= 0.0);
            prop_assert!(state.car.fuel <= FUEL_CAPACITY);
        }
    }

    #[test]
    fn speed_stays_in_range(seed in 0u64..200, script in input_script()) {
        let mut state = GameState::new(seed, Tuning::default()).unwrap();
        for input in &script {
            tick(&mut state, input);
            prop_assert!(state.car.speed <= MAX_SPEED + 1e-4);
            prop_assert!(state.car.speed >= -MAX_SPEED / 2.0 - 1e-4);
        }
    }

    #[test]
    fn wheels_never_end_a_tick_underground(seed in 0u64..100, script in input_script()) {
        let mut state = GameState::new(seed, Tuning::default()).unwrap();
        for input in &script {
            tick(&mut state, input);
            for wheel in [&state.car.back_wheel, &state.car.front_wheel] {
                let rest = state.terrain.get_height(wheel.x) - wheel.radius;
                prop_assert!(
                    wheel.y <= rest + 1e-3,
                    "wheel at y={} below rest={}", wheel.y, rest
                );
            }
        }
    }

    #[test]
    fn get_height_is_total_and_banded(seed in 0u64..100, x in -50_000.0f32..100_000.0) {
        let state = GameState::new(seed, Tuning::default()).unwrap();
        let h = state.terrain.get_height(x);
        prop_assert!(h.is_finite());
        prop_assert!(h >= BASELINE_HEIGHT / 2.0 - BUMP_AMPLITUDE);
        prop_assert!(h <= BASELINE_HEIGHT * 1.5 + BUMP_AMPLITUDE);
    }

    #[test]
    fn get_height_has_no_jumps(seed in 0u64..50, index in 1usize..1990) {
        let state = GameState::new(seed, Tuning::default()).unwrap();
        let points = state.terrain.points();
        prop_assume!(index + 1 < points.len());

        let p = points[index];
        // Exact at the sample itself
        prop_assert!((state.terrain.get_height(p.x) - p.y).abs() < 1e-3);
        // Approaching from either side stays close to the sample value
        let eps = 1e-2;
        prop_assert!((state.terrain.get_height(p.x - eps) - p.y).abs() < 0.5);
        prop_assert!((state.terrain.get_height(p.x + eps) - p.y).abs() < 0.5);
    }

    #[test]
    fn collected_coins_never_revert(seed in 0u64..100, script in input_script()) {
        let mut state = GameState::new(seed, Tuning::default()).unwrap();
        let mut collected = vec![false; state.coins.len()];
        for input in &script {
            tick(&mut state, input);
            for (i, coin) in state.coins.iter().enumerate() {
                prop_assert!(!(collected[i] && !coin.collected), "coin {i} reverted");
                collected[i] = coin.collected;
            }
        }
    }

    #[test]
    fn score_matches_collected_coins(seed in 0u64..100, script in input_script()) {
        let mut state = GameState::new(seed, Tuning::default()).unwrap();
        for input in &script {
            tick(&mut state, input);
        }
        let collected = state.coins.iter().filter(|c| c.collected).count() as u32;
        prop_assert_eq!(state.car.score, collected * SCORE_PER_COIN);
    }
}
