//! Fixed-timestep simulation loop
//!
//! Owns the physics world, the ring, and the ball. Each frame the host
//! calls `step` then `render`. The solver handles contacts; `step` then
//! rescales the ball velocity back to its cruise speed, which is what keeps
//! the bounce "billiard-perfect" despite restitution drift in the solver.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::config::Config;
use crate::physics::{PhysicsWorld, RapierWorld};
use crate::sim::ball::{Ball, BallView};
use crate::sim::ring::{Ring, RingView};

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub ball: BallView,
    pub ring: RingView,
}

/// The running simulation
///
/// Construction is the single init transition: after it the sim only ever
/// runs. The gap interval, heading, and cruise speed are drawn once from a
/// seeded RNG, so a (config, seed) pair fully determines the run.
pub struct Simulation<W: PhysicsWorld> {
    world: W,
    ring: Ring,
    ball: Ball,
    ticks: u64,
}

impl Simulation<RapierWorld> {
    /// Initialize with the rapier backend
    pub fn new(config: &Config, seed: u64) -> Self {
        Self::with_world(RapierWorld::new(), config, seed)
    }
}

impl<W: PhysicsWorld> Simulation<W> {
    /// Initialize on a caller-supplied (zero-gravity) world
    pub fn with_world(mut world: W, config: &Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = config.center();

        let gap_start = rng.random_range(0.0..TAU);
        let mut ring = Ring::new(center, &config.ring, gap_start);
        ring.create(&mut world);

        let heading = rng.random_range(0.0..TAU);
        let cruise_speed = rng.random_range(
            config.ball.initial_speed.min..=config.ball.initial_speed.max,
        );
        let ball = Ball::create(&mut world, center, &config.ball, cruise_speed, heading);

        log::info!(
            "sim initialized: seed {seed}, cruise speed {cruise_speed:.1}, \
             gap start {gap_start:.3}, {} segments",
            ring.segment_count(),
        );

        Self {
            world,
            ring,
            ball,
            ticks: 0,
        }
    }

    /// Advance one fixed timestep and restore the cruise-speed invariant
    ///
    /// A ball at rest is left alone; there is no direction to rescale.
    pub fn step(&mut self, dt: f32) {
        self.world.step(dt);

        let vel = self.ball.velocity(&self.world);
        let speed = vel.length();
        if speed > 0.0 {
            self.world
                .set_velocity(self.ball.body(), vel / speed * self.ball.cruise_speed);
        }

        self.ticks += 1;
    }

    /// Read-only view data for the presentation layer
    pub fn render(&self) -> Frame {
        Frame {
            ball: self.ball.view(&self.world),
            ring: self.ring.view(),
        }
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ball_position(&self) -> Vec2 {
        self.ball.position(&self.world)
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.ball.velocity(&self.world)
    }
}
