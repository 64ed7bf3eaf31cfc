//! Game state and core simulation types
//!
//! All state that must be reproducible from a run seed lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::terrain::Terrain;
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal driving
    Driving,
    /// Terminal: fuel hit zero; physics halts until an explicit restart
    OutOfFuel,
}

/// Events emitted during a tick for the embedding layer (renderer, audio)
///
/// Drained each tick; not part of the persisted deterministic state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected { id: u32 },
    FuelExhausted,
}

/// A wheel with its suspension state
///
/// Owned by exactly one [`Car`]; the y/velocity/compression fields are
/// mutated only by [`super::suspension::integrate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wheel {
    /// Fixed horizontal offset from the chassis reference point
    pub x_offset: f32,
    pub radius: f32,
    pub x: f32,
    pub y: f32,
    pub prev_y: f32,
    pub velocity_y: f32,
    /// Accumulated spin for rolling animation (radians)
    pub rotation: f32,
    pub spring_strength: f32,
    pub damping: f32,
    pub suspension_height: f32,
    /// Last spring displacement, clamped to [0, suspension_height]
    pub compression: f32,
}

impl Wheel {
    pub fn new(x_offset: f32, tuning: &Tuning) -> Self {
        Self {
            x_offset,
            radius: tuning.wheel_radius,
            x: 0.0,
            y: 0.0,
            prev_y: 0.0,
            velocity_y: 0.0,
            rotation: 0.0,
            spring_strength: tuning.spring_strength,
            damping: tuning.wheel_damping,
            suspension_height: tuning.suspension_height,
            compression: 0.0,
        }
    }
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Chassis reference point (top-left of the body rectangle)
    pub x: f32,
    pub y: f32,
    /// Chassis tilt in radians
    pub angle: f32,
    /// Longitudinal speed along the chassis direction
    pub speed: f32,
    pub angular_velocity: f32,
    /// Remaining fuel in [0, fuel_capacity]
    pub fuel: f32,
    pub score: u32,
    /// Total path length driven (world units, both directions)
    pub distance: f32,
    /// Furthest x reached this run
    pub max_distance: f32,
    pub back_wheel: Wheel,
    pub front_wheel: Wheel,
}

impl Car {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.start_x,
            y: tuning.start_y,
            angle: 0.0,
            speed: 0.0,
            angular_velocity: 0.0,
            fuel: tuning.fuel_capacity,
            score: 0,
            distance: 0.0,
            max_distance: 0.0,
            back_wheel: Wheel::new(20.0, tuning),
            front_wheel: Wheel::new(tuning.body_width - 20.0, tuning),
        }
    }

    /// Body center, the reference point for coin pickup
    pub fn center(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(
            self.x + tuning.body_width / 2.0,
            self.y + tuning.body_height / 2.0,
        )
    }

    /// Distance for HUD display, in meters
    pub fn distance_m(&self) -> f32 {
        self.distance * METERS_PER_UNIT
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Flips false -> true exactly once, only inside the tick
    pub collected: bool,
    /// Cosmetic bob animation phase; no physics coupling
    pub bob_phase: f32,
}

impl Coin {
    pub fn new(id: u32, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            radius,
            collected: false,
            bob_phase: 0.0,
        }
    }

    /// Advance the bob animation (called once per tick)
    pub fn update(&mut self) {
        self.bob_phase += COIN_BOB_RATE;
    }

    /// Vertical display offset for the renderer
    pub fn bob_offset(&self) -> f32 {
        self.bob_phase.sin() * COIN_BOB_AMPLITUDE
    }
}

/// RNG state wrapper for reproducible generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Bumped for each regeneration so restarts do not replay the
    /// terrain-generation draws
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }

    /// A fresh generator on the next stream
    pub fn next_stream(&mut self) -> Pcg32 {
        self.stream += 1;
        Pcg32::seed_from_u64(self.seed.wrapping_add(self.stream))
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Generated once at construction, immutable afterwards
    pub terrain: Terrain,
    pub car: Car,
    pub coins: Vec<Coin>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new run: validate the tuning, generate terrain and coins
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let terrain = Terrain::generate(&tuning, &mut rng);
        let mut state = Self {
            seed,
            rng_state,
            car: Car::new(&tuning),
            tuning,
            phase: GamePhase::Driving,
            time_ticks: 0,
            terrain,
            coins: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        state.spawn_coins(&mut rng);
        log::info!(
            "new run: seed={}, {} terrain samples, {} checkpoints, {} coins",
            seed,
            state.terrain.points().len(),
            state.terrain.checkpoints().len(),
            state.coins.len()
        );
        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Populate coins: one above each terrain checkpoint, then random fills
    /// up to the configured count
    pub fn spawn_coins(&mut self, rng: &mut Pcg32) {
        let tuning = self.tuning;
        for i in 0..self.terrain.checkpoints().len() {
            let peak = self.terrain.checkpoints()[i];
            let id = self.next_entity_id();
            self.coins.push(Coin::new(
                id,
                Vec2::new(peak.x, peak.y - COIN_HEIGHT_ABOVE_PEAK),
                tuning.coin_radius,
            ));
        }
        let random_fills = tuning.coin_count.saturating_sub(self.coins.len());
        for _ in 0..random_fills {
            let x = rng.random_range(tuning.coin_edge_margin..tuning.world_width - tuning.coin_edge_margin);
            let y = self.terrain.get_height(x) - rng.random_range(50.0..100.0);
            let id = self.next_entity_id();
            self.coins.push(Coin::new(id, Vec2::new(x, y), tuning.coin_radius));
        }
    }

    /// Atomically start a fresh run over the existing terrain
    ///
    /// Replaces the car and regenerates the coin set in one step; no tick can
    /// observe an old car with new coins or the other way around.
    pub fn reset_run(&mut self) {
        self.car = Car::new(&self.tuning);
        self.coins.clear();
        let mut rng = self.rng_state.next_stream();
        self.spawn_coins(&mut rng);
        self.phase = GamePhase::Driving;
        log::info!("run restarted: {} coins regenerated", self.coins.len());
    }
}
