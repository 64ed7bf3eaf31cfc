//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (the integrators assume unit ticks)
//! - Seeded RNG only, and only during terrain/coin generation
//! - Single-threaded: one car owns its wheels, terrain is immutable
//! - No rendering or platform dependencies

pub mod clock;
pub mod snapshot;
pub mod state;
pub mod suspension;
pub mod terrain;
pub mod tick;

pub use clock::FixedClock;
pub use snapshot::{CarPose, CoinView, RenderSnapshot, WheelView};
pub use state::{Car, Coin, GameEvent, GamePhase, GameState, RngState, Wheel};
pub use terrain::Terrain;
pub use tick::{TickInput, tick};
