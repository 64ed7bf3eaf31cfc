//! Read-only render snapshot
//!
//! The renderer never touches simulation state directly: once per frame it
//! captures this view and draws from it. Everything a HUD or sprite pass
//! needs is here; all physics remains in continuous floating-point space
//! and any display-grid rounding is the renderer's business.

use glam::Vec2;
use serde::Serialize;

use super::state::{Car, Coin, GamePhase, GameState};

/// Wheel pose for drawing (position, spin, spring compression)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WheelView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub rotation: f32,
    pub compression: f32,
}

impl WheelView {
    fn from_wheel(wheel: &super::state::Wheel) -> Self {
        Self {
            x: wheel.x,
            y: wheel.y,
            radius: wheel.radius,
            rotation: wheel.rotation,
            compression: wheel.compression,
        }
    }
}

/// Vehicle pose for drawing
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CarPose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub back_wheel: WheelView,
    pub front_wheel: WheelView,
}

impl CarPose {
    fn from_car(car: &Car) -> Self {
        Self {
            x: car.x,
            y: car.y,
            angle: car.angle,
            back_wheel: WheelView::from_wheel(&car.back_wheel),
            front_wheel: WheelView::from_wheel(&car.front_wheel),
        }
    }
}

/// Coin with its current display offset baked in
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoinView {
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
    pub bob_offset: f32,
}

impl CoinView {
    fn from_coin(coin: &Coin) -> Self {
        Self {
            pos: coin.pos,
            radius: coin.radius,
            collected: coin.collected,
            bob_offset: coin.bob_offset(),
        }
    }
}

/// Per-tick read-only view of the simulation for the rendering layer
#[derive(Debug, Serialize)]
pub struct RenderSnapshot<'a> {
    pub terrain: &'a [Vec2],
    pub car: CarPose,
    pub coins: Vec<CoinView>,
    pub fuel: f32,
    pub score: u32,
    pub distance_m: f32,
    pub game_over: bool,
}

impl<'a> RenderSnapshot<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            terrain: state.terrain.points(),
            car: CarPose::from_car(&state.car),
            coins: state.coins.iter().map(CoinView::from_coin).collect(),
            fuel: state.car.fuel,
            score: state.car.score,
            distance_m: state.car.distance_m(),
            game_over: state.phase == GamePhase::OutOfFuel,
        }
    }
}
