//! Headless demo driver
//!
//! Runs the simulation without a renderer: full throttle until the tank
//! runs dry, one restart, then exit. Useful for eyeballing the physics via
//! logs and for profiling terrain generation.
//!
//! Usage: hill-dash [seed] [tuning.json]

use std::process::ExitCode;

use hill_dash::Tuning;
use hill_dash::consts::SIM_DT;
use hill_dash::sim::{FixedClock, GamePhase, GameState, RenderSnapshot, TickInput};

fn load_tuning(path: Option<&str>) -> Result<Tuning, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {path}: {e}"))?;
            Tuning::from_json(&json).map_err(|e| format!("bad tuning file {path}: {e}"))
        }
        None => Ok(Tuning::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("invalid seed: {arg}");
                return ExitCode::FAILURE;
            }
        },
        None => 0xC0FFEE,
    };
    let tuning = match load_tuning(args.next().as_deref()) {
        Ok(tuning) => tuning,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut state = match GameState::new(seed, tuning) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut clock = FixedClock::new();
    let mut input = TickInput {
        gas: true,
        ..Default::default()
    };
    let mut restarts_left = 1u32;

    // Feed the clock one frame per tick of wall time
    loop {
        clock.advance(&mut state, &mut input, SIM_DT);

        if state.time_ticks % 60 == 0 {
            log::info!(
                "t={:>5} x={:>7.1} speed={:>5.2} fuel={:>5.1} score={}",
                state.time_ticks,
                state.car.x,
                state.car.speed,
                state.car.fuel,
                state.car.score
            );
        }

        if state.phase == GamePhase::OutOfFuel {
            if restarts_left == 0 {
                break;
            }
            restarts_left -= 1;
            input.restart = true;
        }
    }

    let snapshot = RenderSnapshot::capture(&state);
    println!(
        "seed {seed}: drove {:.0} m, score {}, {} of {} coins collected",
        snapshot.distance_m,
        snapshot.score,
        snapshot.coins.iter().filter(|c| c.collected).count(),
        snapshot.coins.len()
    );
    ExitCode::SUCCESS
}
