//! Ball entity
//!
//! A single dynamic circle. Position and velocity live in the physics
//! world; the ball keeps its handle plus the presentation attributes and
//! the cruise speed the sim loop renormalizes to.

use glam::Vec2;

use crate::config::{BallConfig, color_or_white};
use crate::physics::{BodyId, PhysicsWorld};
use crate::polar_to_cartesian;

/// The bouncing ball
pub struct Ball {
    body: BodyId,
    pub radius: f32,
    pub color: u32,
    /// Target velocity magnitude, fixed for the life of the ball
    pub cruise_speed: f32,
}

impl Ball {
    /// Register the ball with the world and launch it along `heading`
    ///
    /// Initial velocity is `cruise_speed · (cos heading, sin heading)`.
    pub fn create<W: PhysicsWorld>(
        world: &mut W,
        pos: Vec2,
        config: &BallConfig,
        cruise_speed: f32,
        heading: f32,
    ) -> Self {
        let body = world.add_circle(pos, config.radius, config.restitution, config.friction);
        world.set_velocity(body, polar_to_cartesian(cruise_speed, heading));
        Self {
            body,
            radius: config.radius,
            color: color_or_white(&config.color),
            cruise_speed,
        }
    }

    /// Physics handle for velocity reads/writes by the sim loop
    pub fn body(&self) -> BodyId {
        self.body
    }

    pub fn position<W: PhysicsWorld>(&self, world: &W) -> Vec2 {
        world.position(self.body)
    }

    pub fn velocity<W: PhysicsWorld>(&self, world: &W) -> Vec2 {
        world.velocity(self.body)
    }

    /// Snapshot for the presentation layer
    pub fn view<W: PhysicsWorld>(&self, world: &W) -> BallView {
        BallView {
            pos: self.position(world),
            radius: self.radius,
            color: self.color,
        }
    }
}

/// Per-frame ball data handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::stub::StubWorld;
    use std::f32::consts::FRAC_PI_2;

    fn test_config() -> BallConfig {
        BallConfig::default()
    }

    #[test]
    fn test_create_sets_cruise_velocity() {
        let mut world = StubWorld::new();
        let ball = Ball::create(&mut world, Vec2::new(540.0, 960.0), &test_config(), 7.5, 0.0);

        assert_eq!(ball.cruise_speed, 7.5);
        let vel = ball.velocity(&world);
        assert!((vel.x - 7.5).abs() < 1e-6);
        assert!(vel.y.abs() < 1e-6);
    }

    #[test]
    fn test_heading_sets_direction() {
        let mut world = StubWorld::new();
        let ball = Ball::create(&mut world, Vec2::ZERO, &test_config(), 10.0, FRAC_PI_2);

        let vel = ball.velocity(&world);
        assert!(vel.x.abs() < 1e-5);
        assert!((vel.y - 10.0).abs() < 1e-5);
        assert!((vel.length() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_view_tracks_world_position() {
        let mut world = StubWorld::new();
        let start = Vec2::new(100.0, 200.0);
        let ball = Ball::create(&mut world, start, &test_config(), 60.0, 0.0);

        assert_eq!(ball.view(&world).pos, start);
        world.step(1.0);
        let view = ball.view(&world);
        assert!((view.pos.x - 160.0).abs() < 1e-3);
        assert_eq!(view.radius, 15.0);
        assert_eq!(view.color, 0xffffff);
    }
}
