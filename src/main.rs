//! Headless demo runner
//!
//! Drives the sim at the fixed timestep and logs the ball pose once a
//! second. Rendering proper is left to a presentation layer consuming
//! [`ring_bounce::Frame`]; this binary is the host frame loop.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ring_bounce::consts::SIM_DT;
use ring_bounce::sim::RingArc;
use ring_bounce::{Config, Simulation};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(clock_seed);

    let config = Config::load("config.json");
    let mut sim = Simulation::new(&config, seed);
    log::info!("ring-bounce running with seed {seed}");

    let frame = sim.render();
    match frame.ring.arc {
        RingArc::Closed => log::info!("ring is closed"),
        RingArc::Open { start, end } => {
            log::info!("ring arc spans {start:.3} to {end:.3} rad")
        }
    }

    for tick in 0u64.. {
        sim.step(SIM_DT);
        let frame = sim.render();

        if tick % 60 == 0 {
            let vel = sim.ball_velocity();
            log::info!(
                "t={:>5.1}s ball at ({:>7.1}, {:>7.1}) speed {:.1}",
                tick as f32 * SIM_DT,
                frame.ball.pos.x,
                frame.ball.pos.y,
                vel.length(),
            );
        }

        std::thread::sleep(Duration::from_secs_f32(SIM_DT));
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
