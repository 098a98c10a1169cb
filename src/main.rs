//! Twinfall entry point
//!
//! Loads a level pair, replays a scripted input tape at the fixed tick
//! rate, and logs the run. Level number and level directory come from
//! the command line: `twinfall [level] [dir]`.

use std::env;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use twinfall::consts::TICK_INTERVAL_MS;
use twinfall::level::load_level;
use twinfall::sim::{TickInput, tick};
use twinfall::{Records, Tuning};

/// Give the tape a generous ceiling before declaring it stuck
const MAX_DEMO_TICKS: u32 = 3000;

/// Hold right, hop briefly every 60 ticks
fn demo_input(tick_no: u32) -> TickInput {
    TickInput {
        move_left: false,
        move_right: true,
        jump: tick_no % 60 < 3,
    }
}

fn main() {
    env_logger::init();
    log::info!("Twinfall starting...");

    let mut args = env::args().skip(1);
    let number: u32 = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(number) => number,
            Err(_) => {
                log::error!("level number {:?} is not an integer", raw);
                process::exit(1);
            }
        },
        None => 1,
    };
    let dir = PathBuf::from(args.next().unwrap_or_else(|| "levels".into()));

    let tuning = Tuning::load("tuning.json");
    let mut level = match load_level(&dir, number, &tuning) {
        Ok(level) => level,
        Err(err) => {
            log::error!("cannot load level {}: {}", number, err);
            process::exit(1);
        }
    };

    for tick_no in 0..MAX_DEMO_TICKS {
        let report = tick(&mut level, &demo_input(tick_no));
        if report.restarted {
            log::info!(
                "impaled at tick {}, {} deaths so far",
                tick_no,
                level.deaths
            );
        }
        if report.completed {
            log::info!(
                "level {} complete at tick {} with {} deaths",
                number,
                tick_no,
                level.deaths
            );
            match Records::new("records").submit(number, level.deaths) {
                Ok(Some(attempts)) => log::info!("new best: {} attempts", attempts),
                Ok(None) => log::info!("record stands"),
                Err(err) => log::warn!("cannot update record: {}", err),
            }
            return;
        }
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }

    log::info!(
        "tape ran out after {} ticks with {} deaths",
        MAX_DEMO_TICKS,
        level.deaths
    );
}
