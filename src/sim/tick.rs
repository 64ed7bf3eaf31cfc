//! Fixed timestep simulation tick
//!
//! Advances the vehicle, the coin animations and the run phase once per
//! tick. Effect order inside a tick is part of the contract: throttle,
//! longitudinal integration, wheel placement, suspension (back then front),
//! chassis orientation, chassis height, wheel spin, coin pickup, fuel floor.

use super::state::{GameEvent, GamePhase, GameState};
use super::suspension;
use crate::consts::*;
use crate::shortest_angle_diff;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub gas: bool,
    pub brake: bool,
    /// Consumed only while out of fuel
    pub restart: bool,
}

/// Advance the simulation by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase == GamePhase::OutOfFuel {
        // Terminal: no physics until an explicit restart
        if input.restart {
            state.reset_run();
        }
        return;
    }

    state.time_ticks += 1;

    advance_car(state, input);

    for coin in &mut state.coins {
        coin.update();
    }
    collect_coins(state);

    // Fuel floor; a coin picked up this tick may already have refilled it
    if state.car.fuel <= 0.0 {
        state.car.fuel = 0.0;
        state.phase = GamePhase::OutOfFuel;
        state.events.push(GameEvent::FuelExhausted);
        log::info!(
            "out of fuel at x={:.1} after {} ticks (score {}, {:.0} m)",
            state.car.x,
            state.time_ticks,
            state.car.score,
            state.car.distance_m()
        );
    }
}

/// Steps 1-8: throttle through wheel spin
fn advance_car(state: &mut GameState, input: &TickInput) {
    let tuning = state.tuning;
    let car = &mut state.car;

    // Throttle / brake; gas burns fuel, braking is free
    let acceleration = if input.gas && car.fuel > 0.0 {
        car.fuel -= tuning.fuel_consumption;
        tuning.throttle_accel
    } else if input.brake {
        -tuning.throttle_accel
    } else {
        0.0
    };

    // Longitudinal dynamics; reverse is limited to half speed
    car.speed += acceleration;
    car.speed *= tuning.friction;
    car.speed = car.speed.clamp(-tuning.max_speed / 2.0, tuning.max_speed);

    let prev_x = car.x;
    car.x += car.speed * car.angle.cos();
    car.distance += (car.x - prev_x).abs();
    car.max_distance = car.max_distance.max(car.x);

    car.back_wheel.x = car.x + car.back_wheel.x_offset;
    car.front_wheel.x = car.x + car.front_wheel.x_offset;

    let back_ground = state.terrain.get_height(car.back_wheel.x);
    let front_ground = state.terrain.get_height(car.front_wheel.x);
    suspension::integrate(&mut car.back_wheel, back_ground);
    suspension::integrate(&mut car.front_wheel, front_ground);

    // Chassis tilt follows the wheel line through a damped angular spring
    let dx = car.front_wheel.x - car.back_wheel.x;
    let dy = car.front_wheel.y - car.back_wheel.y;
    let target_angle = dy.atan2(dx);
    let angle_diff = shortest_angle_diff(target_angle, car.angle);
    car.angular_velocity += angle_diff * ANGULAR_SPRING;
    car.angular_velocity *= 1.0 - ANGULAR_DAMPING;
    car.angle += car.angular_velocity;

    // Chassis hangs below the wheel-center midpoint
    car.y = (car.back_wheel.y + car.front_wheel.y) / 2.0
        - tuning.body_height / 2.0
        - tuning.body_offset_y;

    // Rolling animation, no slip model
    if car.speed.abs() > WHEEL_SPIN_MIN_SPEED {
        let spin = car.speed / car.back_wheel.radius;
        car.back_wheel.rotation += spin;
        car.front_wheel.rotation += spin;
    }
}

/// Step 9: point-vs-circle coin pickup against the body center
fn collect_coins(state: &mut GameState) {
    let tuning = state.tuning;
    let center = state.car.center(&tuning);
    let reach = tuning.body_width / 2.0;

    for coin in &mut state.coins {
        if coin.collected {
            continue;
        }
        if center.distance(coin.pos) < reach + coin.radius {
            coin.collected = true;
            state.car.score += SCORE_PER_COIN;
            state.car.fuel = (state.car.fuel + FUEL_PER_COIN).min(tuning.fuel_capacity);
            state.events.push(GameEvent::CoinCollected { id: coin.id });
            log::debug!("coin {} collected (score {})", coin.id, state.car.score);
        }
    }
}
